//! Tests for building recover operations signed with a local secp256k1 key.

use base64ct::{Base64UrlUnpadded, Encoding};
use sidetree_core::test_utils::{
    document_1, jwk_es256k_1, jwk_es256k_1_private, jwk_es256k_2, jwk_es256k_3,
};
use sidetree_did::hashing::{hash_commitment, hash_data, SHA2_256};
use sidetree_did::keys::{generate_es256k_operation_key_pair, LocalSigner};
use sidetree_did::{Config, Err, Patch, RecoverRequest, RecoverSignedData, Registrar};

const SUFFIX: &str = "EiCNFoLWTklZdpUvPvdSPX-PFx4yK46u7tup9-5aoHx5Rw";

// Recover with the first recovery key, rotating to freshly generated keys.
#[tokio::test]
async fn recover_signed() {
    let signer = LocalSigner::new(&jwk_es256k_1_private()).expect("should create signer");
    let (next_recovery, _) = generate_es256k_operation_key_pair().expect("should generate");
    let (next_update, _) = generate_es256k_operation_key_pair().expect("should generate");

    let request = RecoverRequest {
        did_suffix: SUFFIX.to_string(),
        recovery_key: jwk_es256k_1(),
        next_recovery_key: next_recovery.clone(),
        next_update_key: next_update.clone(),
        document: document_1(),
    };
    let op = Registrar::default().recover(&request, &signer).await.expect("should recover");
    signer.verify(&op.signed_data).expect("should verify");

    assert_eq!(op.did_suffix, SUFFIX);
    assert_eq!(op.reveal_value, "EiCAjgMiZeVyQ8bs096Syu-Or1CyRAyY_koIluirR8nXug");
    assert_eq!(op.delta.patches, vec![Patch::Replace { document: document_1() }]);
    assert_eq!(
        op.delta.update_commitment,
        hash_commitment(&next_update, SHA2_256).expect("should hash")
    );

    let payload = op.signed_data.split('.').nth(1).expect("should have payload");
    let payload = Base64UrlUnpadded::decode_vec(payload).expect("should decode");
    let payload: RecoverSignedData = serde_json::from_slice(&payload).expect("should parse");
    assert_eq!(payload.recovery_key, jwk_es256k_1());
    assert_eq!(
        payload.recovery_commitment,
        hash_commitment(&next_recovery, SHA2_256).expect("should hash")
    );
    assert_eq!(payload.delta_hash, hash_data(&op.delta, SHA2_256).expect("should hash"));
}

// A signer holding a different key cannot produce a signature the recovery key verifies.
#[tokio::test]
async fn wrong_signer() {
    let (_, other_private) = generate_es256k_operation_key_pair().expect("should generate");
    let other = LocalSigner::new(&other_private).expect("should create signer");
    let owner = LocalSigner::new(&jwk_es256k_1_private()).expect("should create signer");

    let request = RecoverRequest {
        did_suffix: SUFFIX.to_string(),
        recovery_key: jwk_es256k_1(),
        next_recovery_key: jwk_es256k_2(),
        next_update_key: jwk_es256k_3(),
        document: document_1(),
    };
    let op = Registrar::default().recover(&request, &other).await.expect("should recover");

    let err = owner.verify(&op.signed_data).expect_err("should not verify");
    assert!(err.is(Err::FailedSignatureVerification));
}

#[tokio::test]
async fn delta_too_large() {
    let signer = LocalSigner::new(&jwk_es256k_1_private()).expect("should create signer");
    let request = RecoverRequest {
        did_suffix: SUFFIX.to_string(),
        recovery_key: jwk_es256k_1(),
        next_recovery_key: jwk_es256k_2(),
        next_update_key: jwk_es256k_3(),
        document: document_1(),
    };

    let registrar = Registrar::new(Config::new().with_max_delta_size(256));
    let err = registrar.recover(&request, &signer).await.expect_err("should fail");
    assert!(err.is(Err::DeltaExceedsMaximumSize));
}
