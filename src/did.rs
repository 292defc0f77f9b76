//! # DID Identifiers
//!
//! A DID's unique suffix is the hash of its create operation's suffix data. The short form,
//! `did:<method>[:<network>]:<suffix>`, only resolves once the create operation is anchored.
//! The long form appends the base64url-encoded canonical create operation so the DID can be
//! resolved before then.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};
use sidetree_core::error::Err;
use sidetree_core::hashing::{canonicalize, hash_data};
use sidetree_core::{tracerr, Result};

use crate::operation::{CreateOperation, Delta, SuffixData};
use crate::registrar::Registrar;

/// Initial state carried by a long-form DID. Serializes with keys in canonical order.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitialState {
    delta: Delta,
    suffix_data: SuffixData,
}

/// The unique suffix of a DID: the multihash of its create operation's suffix data.
///
/// # Errors
///
/// * `UnsupportedHashAlgorithm` if `code` is not supported.
pub fn unique_suffix(suffix_data: &SuffixData, code: u64) -> Result<String> {
    hash_data(suffix_data, code)
}

/// Format a short-form DID. A `None` or `mainnet` network is omitted.
#[must_use]
pub fn short_form_did(method: &str, network: Option<&str>, suffix: &str) -> String {
    match network {
        Some(network) if network != crate::config::MAINNET => {
            format!("did:{method}:{network}:{suffix}")
        }
        _ => format!("did:{method}:{suffix}"),
    }
}

/// Format the long-form DID of a create operation.
///
/// # Errors
///
/// * `UnsupportedHashAlgorithm` if `code` is not supported.
/// * Serialization error if the operation cannot be canonicalized.
pub fn long_form_did(
    method: &str, network: Option<&str>, op: &CreateOperation, code: u64,
) -> Result<String> {
    let suffix = unique_suffix(&op.suffix_data, code)?;
    let state = InitialState {
        delta: op.delta.clone(),
        suffix_data: op.suffix_data.clone(),
    };
    let encoded = Base64UrlUnpadded::encode_string(&canonicalize(&state)?);
    Ok(format!("{}:{encoded}", short_form_did(method, network, &suffix)))
}

/// Split a long-form DID into its short form and the create operation it carries.
///
/// The carried operation must hash to the DID's suffix and its delta must hash to the delta
/// hash in its suffix data.
///
/// # Errors
///
/// * `InvalidDid` if the DID is not a long-form DID or its parts do not match.
/// * `IncorrectEncoding` if the initial state is not base64url.
/// * `DeserializationError` if the initial state is not a create operation.
pub fn split_long_form_did(did: &str, code: u64) -> Result<(String, CreateOperation)> {
    let parts = did.split(':').collect::<Vec<_>>();
    if parts.first() != Some(&"did") || !(4..=5).contains(&parts.len()) {
        tracerr!(Err::InvalidDid, "'{}' is not a long-form DID", did);
    }
    let Some((encoded, short_parts)) = parts.split_last() else {
        tracerr!(Err::InvalidDid, "'{}' is not a long-form DID", did);
    };
    let suffix = short_parts[short_parts.len() - 1];

    let decoded = Base64UrlUnpadded::decode_vec(encoded)?;
    let Ok(state) = serde_json::from_slice::<InitialState>(&decoded) else {
        tracerr!(
            Err::DeserializationError,
            "long-form DID initial state is not a create operation"
        );
    };

    if unique_suffix(&state.suffix_data, code)? != suffix {
        tracerr!(Err::InvalidDid, "initial state does not match suffix '{}'", suffix);
    }
    if hash_data(&state.delta, code)? != state.suffix_data.delta_hash {
        tracerr!(Err::InvalidDid, "delta does not match delta hash of '{}'", suffix);
    }

    let op = CreateOperation {
        suffix_data: state.suffix_data,
        delta: state.delta,
    };
    Ok((short_parts.join(":"), op))
}

impl Registrar {
    /// The unique suffix of the DID created by an operation with this suffix data.
    ///
    /// # Errors
    ///
    /// * `UnsupportedHashAlgorithm` if the configured algorithm is not supported.
    pub fn unique_suffix(&self, suffix_data: &SuffixData) -> Result<String> {
        unique_suffix(suffix_data, self.config().hash_algorithm)
    }

    /// The short-form DID created by `op`, using the configured method and network.
    ///
    /// # Errors
    ///
    /// * `UnsupportedHashAlgorithm` if the configured algorithm is not supported.
    pub fn short_form_did(&self, op: &CreateOperation) -> Result<String> {
        let suffix = self.unique_suffix(&op.suffix_data)?;
        Ok(short_form_did(&self.config().method, self.config().did_network(), &suffix))
    }

    /// The long-form DID created by `op`, using the configured method and network.
    ///
    /// # Errors
    ///
    /// * `UnsupportedHashAlgorithm` if the configured algorithm is not supported.
    pub fn long_form_did(&self, op: &CreateOperation) -> Result<String> {
        let config = self.config();
        long_form_did(&config.method, config.did_network(), op, config.hash_algorithm)
    }
}

#[cfg(test)]
mod tests {
    use sidetree_core::hashing::SHA2_256;
    use sidetree_core::test_utils::{document_1, jwk_es256k_1, jwk_es256k_2};

    use super::*;
    use crate::config::Config;

    #[test]
    fn short_form() {
        assert_eq!(short_form_did("ada", None, "abc123"), "did:ada:abc123");
        assert_eq!(short_form_did("ada", Some("mainnet"), "abc123"), "did:ada:abc123");
        assert_eq!(short_form_did("ada", Some("test"), "abc123"), "did:ada:test:abc123");
    }

    #[test]
    fn configured_network() {
        let registrar = Registrar::new(Config::new().with_network("test"));
        let op = registrar
            .create(&jwk_es256k_1(), &jwk_es256k_2(), &document_1())
            .expect("should create");

        let short = registrar.short_form_did(&op).expect("should format");
        assert_eq!(short, "did:ada:test:EiCNFoLWTklZdpUvPvdSPX-PFx4yK46u7tup9-5aoHx5Rw");

        let long = registrar.long_form_did(&op).expect("should format");
        assert!(long.starts_with(&format!("{short}:eyJkZWx0YSI6")));

        let (split, carried) = split_long_form_did(&long, SHA2_256).expect("should split");
        assert_eq!(split, short);
        assert_eq!(carried, op);
    }

    #[test]
    fn not_long_form() {
        let short = "did:ada:EiCNFoLWTklZdpUvPvdSPX-PFx4yK46u7tup9-5aoHx5Rw";
        let err = split_long_form_did(short, SHA2_256).expect_err("should fail");
        assert!(err.is(Err::InvalidDid));

        let err = split_long_form_did("urn:ada:abc:def", SHA2_256).expect_err("should fail");
        assert!(err.is(Err::InvalidDid));
    }

    #[test]
    fn suffix_mismatch() {
        let registrar = Registrar::default();
        let op = registrar
            .create(&jwk_es256k_1(), &jwk_es256k_2(), &document_1())
            .expect("should create");
        let long = registrar.long_form_did(&op).expect("should format");
        let (_, encoded) = long.rsplit_once(':').expect("should have initial state");

        let forged = format!("did:ada:EiAnKD8-jfdd0MDcZUjAbRgaThBrMxPTFOxcnfJhI7Ukaw:{encoded}");
        let err = split_long_form_did(&forged, SHA2_256).expect_err("should fail");
        assert!(err.is(Err::InvalidDid));
    }
}
