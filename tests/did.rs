//! Tests for long-form DID parsing against a DID created by another Sidetree implementation.

use sidetree_did::hashing::SHA2_256;
use sidetree_did::{long_form_did, split_long_form_did, Endpoint, Err, KeyPurpose};

const ION_DID: &str = "did:ion:EiAnKD8-jfdd0MDcZUjAbRgaThBrMxPTFOxcnfJhI7Ukaw:eyJkZWx0YSI6eyJwYXRjaGVzIjpbeyJhY3Rpb24iOiJyZXBsYWNlIiwiZG9jdW1lbnQiOnsicHVibGljS2V5cyI6W3siaWQiOiJzaWdfNzJiZDE2ZDYiLCJwdWJsaWNLZXlKd2siOnsiY3J2Ijoic2VjcDI1NmsxIiwia3R5IjoiRUMiLCJ4IjoiS2JfMnVOR3Nyd1VOdkh2YUNOckRGdW14VXlQTWZZd3kxNEpZZmphQUhmayIsInkiOiJhSFNDZDVEOFh0RUxvSXBpN1A5eDV1cXBpeEVxNmJDenQ0QldvUVk1UUFRIn0sInB1cnBvc2VzIjpbImF1dGhlbnRpY2F0aW9uIiwiYXNzZXJ0aW9uTWV0aG9kIl0sInR5cGUiOiJFY2RzYVNlY3AyNTZrMVZlcmlmaWNhdGlvbktleTIwMTkifV0sInNlcnZpY2VzIjpbeyJpZCI6ImxpbmtlZGRvbWFpbnMiLCJzZXJ2aWNlRW5kcG9pbnQiOnsib3JpZ2lucyI6WyJodHRwczovL3d3dy52Y3NhdG9zaGkuY29tLyJdfSwidHlwZSI6IkxpbmtlZERvbWFpbnMifV19fV0sInVwZGF0ZUNvbW1pdG1lbnQiOiJFaUR4SWxJak9xQk5NTGZjdzZndWpHNEdFVDM3UjBIRWM2Z20xclNZTjlMOF9RIn0sInN1ZmZpeERhdGEiOnsiZGVsdGFIYXNoIjoiRWlBLXV3TWo3RVFheURmWTRJS3pfSE9LdmJZQ05td19Tb1lhUmhOcWhFSWhudyIsInJlY292ZXJ5Q29tbWl0bWVudCI6IkVpQ0czQ1M5RFJpeU1JRVoxRl9sSjZnRVRMZWVHREwzZnpuQUViMVRGdFZXNEEifX0";

// A published long-form ION DID splits into a create operation that re-encodes to the same
// DID.
#[test]
fn ion_long_form() {
    let (short, op) = split_long_form_did(ION_DID, SHA2_256).expect("should split");
    assert_eq!(short, "did:ion:EiAnKD8-jfdd0MDcZUjAbRgaThBrMxPTFOxcnfJhI7Ukaw");
    assert_eq!(op.suffix_data.delta_hash, "EiA-uwMj7EQayDfY4IKz_HOKvbYCNmw_SoYaRhNqhEIhnw");
    assert_eq!(
        op.suffix_data.recovery_commitment,
        "EiCG3CS9DRiyMIEZ1F_lJ6gETLeeGDL3fznAEb1TFtVW4A"
    );

    let sidetree_did::Patch::Replace { document } = &op.delta.patches[0] else {
        panic!("should be a replace patch");
    };
    let keys = document.public_keys.as_ref().expect("should have keys");
    assert_eq!(keys[0].id, "sig_72bd16d6");
    assert_eq!(
        keys[0].purposes,
        Some(vec![KeyPurpose::Authentication, KeyPurpose::AssertionMethod])
    );
    let services = document.services.as_ref().expect("should have services");
    assert!(matches!(services[0].service_endpoint, Endpoint::Map(_)));

    let did = long_form_did("ion", None, &op, SHA2_256).expect("should encode");
    assert_eq!(did, ION_DID);
}

// Changing the method does not invalidate the initial state, but changing the suffix does.
#[test]
fn tampered_suffix() {
    let forged = ION_DID.replacen("EiAnKD8", "EiAnKD9", 1);
    let err = split_long_form_did(&forged, SHA2_256).expect_err("should fail");
    assert!(err.is(Err::InvalidDid));

    let renamed = ION_DID.replacen("did:ion:", "did:ada:", 1);
    let (short, _) = split_long_form_did(&renamed, SHA2_256).expect("should split");
    assert_eq!(short, "did:ada:EiAnKD8-jfdd0MDcZUjAbRgaThBrMxPTFOxcnfJhI7Ukaw");
}

#[test]
fn initial_state_not_base64() {
    let did = "did:ada:EiAnKD8-jfdd0MDcZUjAbRgaThBrMxPTFOxcnfJhI7Ukaw:e30*";
    let err = split_long_form_did(did, SHA2_256).expect_err("should fail");
    assert!(err.is(Err::IncorrectEncoding));
}

#[test]
fn initial_state_not_create() {
    // base64url of {}
    let did = "did:ada:EiAnKD8-jfdd0MDcZUjAbRgaThBrMxPTFOxcnfJhI7Ukaw:e30";
    let err = split_long_form_did(did, SHA2_256).expect_err("should fail");
    assert!(err.is(Err::DeserializationError));
}
