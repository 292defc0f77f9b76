//! Operation keys and signing.

use serde::{Deserialize, Serialize};

pub mod signer;

/// Role of an operation key. Determines which JWK fields are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRole {
    /// Public key: `kty`, `crv`, `x`, `y`.
    Public,
    /// Private key: the public fields plus `d`.
    Private,
}

impl KeyRole {
    /// JWK properties allowed for this role.
    #[must_use]
    pub const fn allowed_fields(self) -> &'static [&'static str] {
        match self {
            Self::Public => &["kty", "crv", "x", "y"],
            Self::Private => &["kty", "crv", "x", "y", "d"],
        }
    }
}

/// Display key role as a string.
impl std::fmt::Display for KeyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => write!(f, "public"),
            Self::Private => write!(f, "private"),
        }
    }
}

/// ES256K JSON Web Key (JWK) used to authorize Sidetree operations.
///
/// The structure is closed: deserializing a key with any other property fails. Use
/// [`parse_operation_key`](crate::validate::parse_operation_key) to get a coded error instead.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Jwk {
    /// Key type.
    pub kty: String,
    /// Cryptographic curve type.
    pub crv: String,
    /// X coordinate.
    pub x: String,
    /// Y coordinate.
    pub y: String,
    /// Secret key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl Jwk {
    /// The public part of this key.
    #[must_use]
    pub fn to_public(&self) -> Self {
        Self {
            d: None,
            ..self.clone()
        }
    }
}

/// Types of key signature algorithm.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    /// ECDSA using the secp256k1 curve.
    #[serde(rename = "ES256K")]
    Secp256k1,
    /// `EdDSA` using the Ed25519 curve.
    #[serde(rename = "EdDSA")]
    Ed25519,
}

/// Key signature type display label.
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Secp256k1 => write!(f, "ES256K"),
            Self::Ed25519 => write!(f, "EdDSA"),
        }
    }
}

/// Verification method type for a key signature type.
impl Algorithm {
    /// Get the verification method type for the specified key signature type.
    #[must_use]
    pub fn cryptosuite(&self) -> String {
        match self {
            Self::Secp256k1 => "EcdsaSecp256k1VerificationKey2019".to_string(),
            Self::Ed25519 => "JsonWebKey2020".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn public_key_serialization() {
        let jwk = Jwk {
            kty: "EC".to_string(),
            crv: "secp256k1".to_string(),
            x: "XFl4fd9n4qp2Gcc2_oqqUsI3uT63o3Jt0f54DiNOijw".to_string(),
            y: "IH_q19UKDu_jkIwtehWU7NiaXk7CaGoD-XRcuuqcgQ0".to_string(),
            d: Some("CB6W6NKEuI4uiYiyM2CM4YzczOYXdx-ykAe5rlZaB-Q".to_string()),
        };

        let public = serde_json::to_value(jwk.to_public()).expect("serialize");
        assert_eq!(
            public,
            json!({
                "kty": "EC",
                "crv": "secp256k1",
                "x": "XFl4fd9n4qp2Gcc2_oqqUsI3uT63o3Jt0f54DiNOijw",
                "y": "IH_q19UKDu_jkIwtehWU7NiaXk7CaGoD-XRcuuqcgQ0",
            })
        );
    }

    #[test]
    fn unknown_field_rejected() {
        let res = serde_json::from_value::<Jwk>(json!({"kty": "EC", "alg": "ES256K"}));
        assert!(res.is_err());
    }

    #[test]
    fn algorithm_label() {
        assert_eq!(Algorithm::Secp256k1.to_string(), "ES256K");
        assert_eq!(serde_json::to_value(Algorithm::Secp256k1).expect("ser"), json!("ES256K"));
        assert_eq!(Algorithm::Ed25519.cryptosuite(), "JsonWebKey2020");
    }
}
