//! # Sidetree Core
//!
//! Types and functions shared by the Sidetree operation builders: the commitment hasher, the
//! input validator, the document and patch data model, and the [`Signer`] capability that
//! builders use to prove possession of update and recovery keys.

pub mod document;
pub mod error;
pub mod hashing;
pub mod keys;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod validate;

pub use document::patch::{Patch, PatchAction};
pub use document::service::{Endpoint, Service};
pub use document::{Document, KeyPurpose, PublicKey};
pub use keys::signer::{Header, Signer};
pub use keys::{Algorithm, Jwk, KeyRole};

/// Result type for Sidetree Core.
pub type Result<T, E = error::Error> = core::result::Result<T, E>;
