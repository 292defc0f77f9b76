//! Stub signer for use in tests. Produces a well-formed compact JWS with a fixed signature so
//! operation output is deterministic.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::Serialize;

use crate::keys::signer::{Header, Signer};
use crate::keys::Algorithm;
use crate::Result;

/// Signature segment emitted by [`Test`], base64url of `signature`.
pub const SIGNATURE: &str = "c2lnbmF0dXJl";

/// Test signer for use in tests.
#[derive(Default)]
pub struct Test {}

impl Signer for Test {
    fn supported_algorithms(&self) -> Vec<Algorithm> {
        vec![Algorithm::Secp256k1]
    }

    async fn sign<T: Serialize + Sync>(&self, header: &Header, payload: &T) -> Result<String> {
        let hdr_64 = Base64UrlUnpadded::encode_string(&serde_json::to_vec(header)?);
        let msg_64 = Base64UrlUnpadded::encode_string(&serde_json::to_vec(payload)?);
        Ok(format!("{hdr_64}.{msg_64}.{SIGNATURE}"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn sign_stub() {
        let header = Header {
            alg: Algorithm::Secp256k1,
        };
        let signed = Test {}.sign(&header, &json!({"a": 1})).await.expect("failed to sign");

        assert_eq!(signed, "eyJhbGciOiJFUzI1NksifQ.eyJhIjoxfQ.c2lnbmF0dXJl");
    }
}
