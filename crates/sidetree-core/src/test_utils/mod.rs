//! Fixed keys, documents and a stub signer for use in tests.

pub mod signer;

use serde_json::json;

use crate::document::service::Service;
use crate::document::{Document, KeyPurpose, PublicKey};
use crate::keys::Jwk;

pub use signer::Test as TestSigner;

fn es256k(x: &str, y: &str, d: Option<&str>) -> Jwk {
    Jwk {
        kty: "EC".to_string(),
        crv: "secp256k1".to_string(),
        x: x.to_string(),
        y: y.to_string(),
        d: d.map(ToString::to_string),
    }
}

/// First secp256k1 key pair, private part. Its public part is [`jwk_es256k_1`].
#[must_use]
pub fn jwk_es256k_1_private() -> Jwk {
    es256k(
        "XFl4fd9n4qp2Gcc2_oqqUsI3uT63o3Jt0f54DiNOijw",
        "IH_q19UKDu_jkIwtehWU7NiaXk7CaGoD-XRcuuqcgQ0",
        Some("CB6W6NKEuI4uiYiyM2CM4YzczOYXdx-ykAe5rlZaB-Q"),
    )
}

/// First secp256k1 public key.
#[must_use]
pub fn jwk_es256k_1() -> Jwk {
    jwk_es256k_1_private().to_public()
}

/// Second secp256k1 public key.
#[must_use]
pub fn jwk_es256k_2() -> Jwk {
    es256k(
        "QJZEHYfuTyjhIywIPKW_VLj9KQHUjLYCZJXJaNo2JQ4",
        "p_j1EtkaHqnuporRvK1Y0iyQ3orNmj5EzFVErdkGOFg",
        None,
    )
}

/// Third secp256k1 public key.
#[must_use]
pub fn jwk_es256k_3() -> Jwk {
    es256k(
        "smmFWI4qLfWztIzwurLCvjjw7guNZvN99ai2oTXGUtc",
        "rxp_kiiXHitxLHe545cePsF0y_Mdv_dy6zY4ov_0q9g",
        None,
    )
}

/// Fourth secp256k1 public key.
#[must_use]
pub fn jwk_es256k_4() -> Jwk {
    es256k(
        "BoCXWUX2swC6ERZXyKcfhAdv1Qjvb6Yf4jJqp2cfRgQ",
        "5KZPs8N0i1bIa_XhbB8BzR8pCi4yUv1AulLfrq4lJnU",
        None,
    )
}

/// Document key with authentication and key agreement purposes.
#[must_use]
pub fn public_key_model_1() -> PublicKey {
    PublicKey {
        id: "publicKeyModel1Id".to_string(),
        type_: "EcdsaSecp256k1VerificationKey2019".to_string(),
        public_key_jwk: json!({
            "kty": "EC",
            "crv": "secp256k1",
            "x": "tXSKB_rubXS7sCjXqupVJEzTcW3MsjmEvq1YpXn96Zg",
            "y": "dOicXqbjFxoGJ-K0-GJ1kHYJqic_D_OMuUwkQ7Ol6nk"
        }),
        purposes: Some(vec![KeyPurpose::Authentication, KeyPurpose::KeyAgreement]),
    }
}

/// Service with a URL endpoint.
#[must_use]
pub fn service_1() -> Service {
    Service {
        id: "service1Id".to_string(),
        type_: "service1Type".to_string(),
        service_endpoint: "http://www.service1.com".into(),
    }
}

/// Document with [`public_key_model_1`] and [`service_1`].
#[must_use]
pub fn document_1() -> Document {
    Document {
        public_keys: Some(vec![public_key_model_1()]),
        services: Some(vec![service_1()]),
    }
}
