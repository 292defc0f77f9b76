//! Canonicalization, hashing and multi-hashing of operation data.
//!
//! Two derivations are used throughout the protocol:
//!
//! * [`hash_data`] - canonicalize, multi-hash, encode. Produces delta hashes, unique suffixes and
//!   reveal values.
//! * [`hash_commitment`] - canonicalize, hash, multi-hash the hash, encode. Produces the
//!   commitments that a later reveal value must satisfy.

use base64ct::{Base64UrlUnpadded, Encoding};
use multihash::Multihash;
use olpc_cjson::CanonicalFormatter;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::{error::Err, tracerr, Result};

/// Multihash code for SHA2-256.
pub const SHA2_256: u64 = 0x12;

/// Serialize the provided data as canonical JSON.
/// See [JSON Canonicalization Scheme (JCS)](https://identity.foundation/JCS/) for details.
///
/// # Errors
///
/// * Serialization error if the data cannot be serialized.
pub fn canonicalize(data: &impl Serialize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter::new());
    data.serialize(&mut ser)?;
    Ok(buf)
}

/// Transforms the provided data into a base64-encoded multihash. It creates canonical JSON,
/// multi-hashes it, and then base64-encodes the result.
///
/// # Arguments
///
/// * `data` - The data to hash.
/// * `code` - Multihash code of the hash algorithm to use.
///
/// # Returns
///
/// A base64-encoded multi-hash of the data.
///
/// # Errors
///
/// * Serialization error if the data cannot be serialized.
/// * `UnsupportedHashAlgorithm` if `code` is not supported.
pub fn hash_data(data: &impl Serialize, code: u64) -> Result<String> {
    let buf = canonicalize(data)?;
    hash_then_encode(&buf, code)
}

/// Hash a public key by hashing its canonical JSON representation and then multi-hashing the
/// hash. The result is a commitment that only the single-hashed key (see [`hash_data`]) can
/// satisfy.
///
/// # Errors
///
/// * Serialization error if the key cannot be serialized.
/// * `UnsupportedHashAlgorithm` if `code` is not supported.
pub fn hash_commitment(data: &impl Serialize, code: u64) -> Result<String> {
    let buf = canonicalize(data)?;
    let hashed = hash_bytes(&buf, code)?;
    hash_then_encode(&hashed, code)
}

/// Multi-hash the provided bytes and base64-encode the result.
///
/// # Errors
///
/// * `UnsupportedHashAlgorithm` if `code` is not supported.
pub fn hash_then_encode(data: &[u8], code: u64) -> Result<String> {
    let multi = multi_hash(data, code)?;
    Ok(Base64UrlUnpadded::encode_string(&multi))
}

/// Hashes the provided data without multihash framing.
///
/// # Errors
///
/// * `UnsupportedHashAlgorithm` if `code` is not supported.
pub fn hash_bytes(data: &[u8], code: u64) -> Result<Vec<u8>> {
    match code {
        SHA2_256 => Ok(Sha256::digest(data).to_vec()),
        _ => tracerr!(Err::UnsupportedHashAlgorithm, "hash algorithm {} is not supported", code),
    }
}

/// Multi-hashes the provided data: the digest prefixed by the algorithm code and digest length.
///
/// # Errors
///
/// * `UnsupportedHashAlgorithm` if `code` is not supported.
pub fn multi_hash(data: &[u8], code: u64) -> Result<Vec<u8>> {
    let hashed = hash_bytes(data, code)?;
    let mhash = Multihash::<64>::wrap(code, &hashed)?;
    Ok(mhash.to_bytes())
}

/// Check the provided string is a base64-encoded multihash computed with the expected algorithm.
///
/// # Arguments
///
/// * `encoded` - The encoded hash to check.
/// * `code` - Multihash code the hash is expected to use.
/// * `context` - Name of the value being checked, used in error messages.
///
/// # Errors
///
/// * `IncorrectEncoding` - The value is not base64url.
/// * `NotAMultihash` - The decoded value is not a multihash.
/// * `UnsupportedHashAlgorithm` - The multihash was computed with a different algorithm.
pub fn check(encoded: &str, code: u64, context: &str) -> Result<()> {
    let Ok(decoded) = Base64UrlUnpadded::decode_vec(encoded) else {
        tracerr!(Err::IncorrectEncoding, "{} '{}' is not base64url encoded", context, encoded);
    };
    let Ok(wrapped) = Multihash::<64>::from_bytes(&decoded) else {
        tracerr!(Err::NotAMultihash, "{} '{}' is not a multihash", context, encoded);
    };
    if wrapped.code() != code {
        tracerr!(
            Err::UnsupportedHashAlgorithm,
            "{} hash algorithm {} does not match expected {}",
            context,
            wrapped.code(),
            code
        );
    }
    Ok(())
}
