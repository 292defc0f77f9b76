use base64ct::{Base64UrlUnpadded, Encoding};
use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use serde_json::{json, Value};
use sidetree_core::error::Err;
use sidetree_core::{tracerr, Algorithm, Result};

use crate::{AsymmetricKey, KeyPair as KeyPairBehavior};

/// Key pair for Ed25519, expressed as OKP JWKs.
pub type KeyPair = AsymmetricKey<VerifyingKey, SigningKey>;

impl KeyPairBehavior for KeyPair {
    fn key_type() -> Algorithm {
        Algorithm::Ed25519
    }

    fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self {
            verifying_key: signing_key.verifying_key(),
            signing_key: Some(signing_key),
        }
    }

    fn public_jwk(&self) -> Result<Value> {
        Ok(json!({
            "kty": "OKP",
            "crv": "Ed25519",
            "x": Base64UrlUnpadded::encode_string(self.verifying_key.as_bytes()),
        }))
    }

    fn private_jwk(&self) -> Result<Value> {
        let Some(sk) = &self.signing_key else {
            tracerr!(Err::InvalidKey, "no secret key");
        };
        let mut jwk = self.public_jwk()?;
        jwk["d"] = Value::String(Base64UrlUnpadded::encode_string(&sk.to_bytes()));
        Ok(jwk)
    }
}
