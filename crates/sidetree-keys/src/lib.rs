//! # Sidetree Keys
//!
//! Key pair generation for operation keys and DID document keys, and a [`LocalSigner`] that signs
//! operations with an in-memory secp256k1 private key.
//!
//! Keys are not stored: generated private keys are returned to the caller.

use serde_json::Value;
use sidetree_core::validate::{check_id, check_purposes, parse_operation_key};
use sidetree_core::{Algorithm, Jwk, KeyPurpose, KeyRole, PublicKey, Result};

mod ed25519;
mod secp256k1;
mod signer;

pub use ed25519::KeyPair as Ed25519KeyPair;
pub use secp256k1::KeyPair as Secp256k1KeyPair;
pub use signer::LocalSigner;

/// Asymmetric key pair.
#[derive(Clone, Debug)]
pub struct AsymmetricKey<V, S> {
    /// Key for verifying.
    pub verifying_key: V,
    /// Secret key for signing.
    pub signing_key: Option<S>,
}

/// A supported key type needs to be able to generate a key pair and express itself as a JWK.
pub trait KeyPair {
    /// Declare the type of the algorithm used to generate a key pair.
    fn key_type() -> Algorithm;

    /// Generate a new key pair.
    fn generate() -> Self
    where
        Self: Sized;

    /// Express the public key as a JWK.
    ///
    /// # Errors
    ///
    /// An error should be returned if the key could not be expressed as a JWK.
    fn public_jwk(&self) -> Result<Value>;

    /// Express the private key as a JWK.
    ///
    /// # Errors
    ///
    /// An error should be returned if the key pair has no secret key.
    fn private_jwk(&self) -> Result<Value>;
}

/// Generate an ES256K key pair for use as a recovery or update key.
///
/// # Returns
///
/// The public key (`kty`, `crv`, `x`, `y`) and the private key (the same plus `d`).
///
/// # Errors
///
/// An error is returned if the generated key cannot be expressed as a valid operation key.
pub fn generate_es256k_operation_key_pair() -> Result<(Jwk, Jwk)> {
    let kp = Secp256k1KeyPair::generate();
    let public = parse_operation_key(&kp.public_jwk()?, KeyRole::Public)?;
    let private = parse_operation_key(&kp.private_jwk()?, KeyRole::Private)?;
    Ok((public, private))
}

/// Generate an Ed25519 key pair.
///
/// # Returns
///
/// The public key (`kty`, `crv`, `x`) and the private key (the same plus `d`), as OKP JWKs.
///
/// # Errors
///
/// An error is returned if the generated key cannot be expressed as a JWK.
pub fn generate_ed25519_operation_key_pair() -> Result<(Value, Value)> {
    let kp = Ed25519KeyPair::generate();
    Ok((kp.public_jwk()?, kp.private_jwk()?))
}

/// Returns true if `jwk` is a secp256k1 EC key, public or private.
#[must_use]
pub fn is_jwk_es256k(jwk: &Value) -> bool {
    jwk["kty"] == "EC" && jwk["crv"] == "secp256k1"
}

/// Returns true if `jwk` is an Ed25519 OKP key, public or private.
#[must_use]
pub fn is_jwk_ed25519(jwk: &Value) -> bool {
    jwk["kty"] == "OKP" && jwk["crv"] == "Ed25519"
}

/// Generate a secp256k1 key pair for inclusion in a DID document.
///
/// # Errors
///
/// An error is returned if the id or purposes are invalid.
pub fn generate_es256k_did_document_key_pair(
    id: &str, purposes: &[KeyPurpose],
) -> Result<(PublicKey, Value)> {
    generate_did_document_key_pair::<Secp256k1KeyPair>(id, purposes)
}

/// Generate an Ed25519 key pair for inclusion in a DID document.
///
/// # Errors
///
/// An error is returned if the id or purposes are invalid.
pub fn generate_ed25519_did_document_key_pair(
    id: &str, purposes: &[KeyPurpose],
) -> Result<(PublicKey, Value)> {
    generate_did_document_key_pair::<Ed25519KeyPair>(id, purposes)
}

/// Generate a key pair of type `K` for inclusion in a DID document. An empty `purposes` list
/// produces a key with no `purposes` field.
///
/// # Returns
///
/// The document key entry and the private key as a JWK.
///
/// # Errors
///
/// An error is returned if the id or purposes are invalid.
pub fn generate_did_document_key_pair<K: KeyPair>(
    id: &str, purposes: &[KeyPurpose],
) -> Result<(PublicKey, Value)> {
    check_id(id)?;
    check_purposes(Some(purposes))?;

    let kp = K::generate();
    let public_key = PublicKey {
        id: id.to_string(),
        type_: K::key_type().cryptosuite(),
        public_key_jwk: kp.public_jwk()?,
        purposes: (!purposes.is_empty()).then(|| purposes.to_vec()),
    };
    Ok((public_key, kp.private_jwk()?))
}
