use ecdsa::{SigningKey, VerifyingKey};
use k256::{PublicKey, SecretKey, Secp256k1};
use rand::rngs::OsRng;
use serde_json::Value;
use sidetree_core::error::Err;
use sidetree_core::{tracerr, Algorithm, Result};

use crate::{AsymmetricKey, KeyPair as KeyPairBehavior};

/// Key pair for Secp256k1.
pub type KeyPair = AsymmetricKey<VerifyingKey<Secp256k1>, SigningKey<Secp256k1>>;

/// `KeyPair` implementation for Secp256k1.
impl KeyPairBehavior for KeyPair {
    fn key_type() -> Algorithm {
        Algorithm::Secp256k1
    }

    fn generate() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        let verifying_key = signing_key.verifying_key();
        Self {
            verifying_key: *verifying_key,
            signing_key: Some(signing_key),
        }
    }

    fn public_jwk(&self) -> Result<Value> {
        let public_key = PublicKey::from(self.verifying_key);
        Ok(serde_json::from_str(&public_key.to_jwk_string())?)
    }

    fn private_jwk(&self) -> Result<Value> {
        let Some(sk) = &self.signing_key else {
            tracerr!(Err::InvalidKey, "no secret key");
        };
        let secret_key = SecretKey::from(sk);
        Ok(serde_json::from_str(&secret_key.to_jwk_string())?)
    }
}
