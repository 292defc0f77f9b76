use base64ct::{Base64UrlUnpadded, Encoding};
use ecdsa::signature::{Signer as _, Verifier as _};
use ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::Secp256k1;
use serde::Serialize;
use sidetree_core::error::Err;
use sidetree_core::validate::check_operation_key;
use sidetree_core::{tracerr, Algorithm, Header, Jwk, KeyRole, Result, Signer};

use crate::secp256k1::KeyPair;
use crate::KeyPair as _;

/// Signs operations with an in-memory secp256k1 private key.
#[derive(Clone, Debug)]
pub struct LocalSigner {
    key: KeyPair,
}

impl LocalSigner {
    /// Create a signer from a private ES256K JWK.
    ///
    /// # Errors
    ///
    /// * Any validation error for a private operation key.
    /// * `InvalidKey` - `d` is not a valid scalar or does not match `x` and `y`.
    pub fn new(private_key: &Jwk) -> Result<Self> {
        check_operation_key(private_key, KeyRole::Private)?;

        let d = Base64UrlUnpadded::decode_vec(private_key.d.as_deref().unwrap_or_default())?;
        let signing_key = match SigningKey::<Secp256k1>::from_slice(&d) {
            Ok(sk) => sk,
            Err(e) => tracerr!(Err::InvalidKey, "private key is not a valid scalar: {}", e),
        };
        let key = KeyPair {
            verifying_key: *signing_key.verifying_key(),
            signing_key: Some(signing_key),
        };

        let public = key.public_jwk()?;
        if public["x"] != private_key.x.as_str() || public["y"] != private_key.y.as_str() {
            tracerr!(Err::InvalidKey, "private key 'd' does not match 'x' and 'y'");
        }
        Ok(Self { key })
    }

    /// Verify a compact JWS produced by this signer.
    ///
    /// # Errors
    ///
    /// * `FailedSignatureVerification` - The value is not a compact JWS or the signature is
    ///   invalid.
    pub fn verify(&self, compact: &str) -> Result<()> {
        let Some((signing_input, encoded_sig)) = compact.rsplit_once('.') else {
            tracerr!(Err::FailedSignatureVerification, "signature is not a compact JWS");
        };
        let decoded_sig = Base64UrlUnpadded::decode_vec(encoded_sig)?;
        let sig = match Signature::<Secp256k1>::from_slice(&decoded_sig) {
            Ok(sig) => sig,
            Err(e) => tracerr!(Err::FailedSignatureVerification, "invalid signature: {}", e),
        };

        let verifying_key: &VerifyingKey<Secp256k1> = &self.key.verifying_key;
        match verifying_key.verify(signing_input.as_bytes(), &sig) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracerr!(Err::FailedSignatureVerification, "Error verifying signature: {}", e)
            }
        }
    }
}

impl Signer for LocalSigner {
    fn supported_algorithms(&self) -> Vec<Algorithm> {
        vec![Algorithm::Secp256k1]
    }

    /// Sign `header.payload` with ES256K: SHA-256 over the signing input, then ECDSA on
    /// secp256k1. The signature is the 64-byte `r || s` encoding.
    async fn sign<T: Serialize + Sync>(&self, header: &Header, payload: &T) -> Result<String> {
        self.algorithm(Some(header.alg))?;

        let hdr_64 = Base64UrlUnpadded::encode_string(&serde_json::to_vec(header)?);
        let msg_64 = Base64UrlUnpadded::encode_string(&serde_json::to_vec(payload)?);
        let signing_input = format!("{hdr_64}.{msg_64}");

        let Some(sk) = &self.key.signing_key else {
            tracerr!(Err::SigningError, "no secret key");
        };
        let sig: Signature<Secp256k1> = sk.sign(signing_input.as_bytes());
        let encoded_sig = Base64UrlUnpadded::encode_string(&sig.to_bytes());

        Ok(format!("{signing_input}.{encoded_sig}"))
    }
}
