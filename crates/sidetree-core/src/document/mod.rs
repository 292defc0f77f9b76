//! Document descriptors carried by `replace` patches, and the keys and services that make them
//! up.

pub mod patch;
pub mod service;

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::service::Service;

/// Document state supplied on create and recover. Replaces the DID document in full.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Public keys of the DID subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_keys: Option<Vec<PublicKey>>,
    /// Services advertised by the DID subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,
}

/// Public key entry in a document descriptor.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKey {
    /// Key identifier, unique within the document.
    pub id: String,
    /// Verification method type, for example `EcdsaSecp256k1VerificationKey2019`.
    #[serde(rename = "type")]
    pub type_: String,
    /// The public key as a JWK. Kept as raw JSON: document keys may use any key type.
    pub public_key_jwk: Value,
    /// Verification relationships for the key. An empty list is not serialized.
    #[serde(default, skip_serializing_if = "no_purposes")]
    pub purposes: Option<Vec<KeyPurpose>>,
}

#[allow(clippy::ref_option)]
fn no_purposes(purposes: &Option<Vec<KeyPurpose>>) -> bool {
    purposes.as_ref().map_or(true, Vec::is_empty)
}

/// Verification relationship a document key may be used for.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyPurpose {
    /// The key is used to authenticate the DID subject.
    Authentication,
    /// The key is used to express claims, such as issuing a Verifiable Credential.
    AssertionMethod,
    /// The key is used to invoke a cryptographic capability.
    CapabilityInvocation,
    /// The key is used to delegate a cryptographic capability to another party.
    CapabilityDelegation,
    /// The key is used to establish a secure communication channel.
    KeyAgreement,
}

impl Display for KeyPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authentication => write!(f, "authentication"),
            Self::AssertionMethod => write!(f, "assertionMethod"),
            Self::CapabilityInvocation => write!(f, "capabilityInvocation"),
            Self::CapabilityDelegation => write!(f, "capabilityDelegation"),
            Self::KeyAgreement => write!(f, "keyAgreement"),
        }
    }
}
