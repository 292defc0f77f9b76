//! Patches carried in an operation delta. Each patch describes one change to a DID document;
//! patches are applied by resolvers in the order they appear.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::document::service::Service;
use crate::document::{Document, PublicKey};

/// Types of patches (updates) that can be applied to a DID document.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatchAction {
    /// Create a new DID document or replace an entire DID document.
    Replace,
    /// Add one or more public keys to the DID document.
    AddPublicKeys,
    /// Remove one or more public keys from the DID document.
    RemovePublicKeys,
    /// Add one or more services to the DID document.
    AddServices,
    /// Remove one or more services from the DID document.
    RemoveServices,
}

impl Display for PatchAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self {
            Self::Replace => write!(f, "replace"),
            Self::AddPublicKeys => write!(f, "add-public-keys"),
            Self::RemovePublicKeys => write!(f, "remove-public-keys"),
            Self::AddServices => write!(f, "add-services"),
            Self::RemoveServices => write!(f, "remove-services"),
        }
    }
}

/// A single change to a DID document. Serialized with the action name in the `action` field.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Patch {
    /// Replace the whole document.
    Replace {
        /// New document state.
        document: Document,
    },
    /// Add services, overwriting any with the same id.
    AddServices {
        /// Services to add.
        services: Vec<Service>,
    },
    /// Remove services by id.
    RemoveServices {
        /// Ids of services to remove.
        ids: Vec<String>,
    },
    /// Add public keys, overwriting any with the same id.
    AddPublicKeys {
        /// Keys to add.
        #[serde(rename = "publicKeys")]
        public_keys: Vec<PublicKey>,
    },
    /// Remove public keys by id.
    RemovePublicKeys {
        /// Ids of keys to remove.
        ids: Vec<String>,
    },
}

impl Patch {
    /// The action this patch performs.
    #[must_use]
    pub const fn action(&self) -> PatchAction {
        match self {
            Self::Replace { .. } => PatchAction::Replace,
            Self::AddServices { .. } => PatchAction::AddServices,
            Self::RemoveServices { .. } => PatchAction::RemoveServices,
            Self::AddPublicKeys { .. } => PatchAction::AddPublicKeys,
            Self::RemovePublicKeys { .. } => PatchAction::RemovePublicKeys,
        }
    }
}
