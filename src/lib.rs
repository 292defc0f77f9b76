//! # Sidetree DID Operations
//!
//! Builds the create, update, recover and deactivate operations of a Sidetree-based DID method
//! and derives the DIDs they create.
//!
//! Operations are built by a [`Registrar`] for a fixed [`Config`]. Update, recover and
//! deactivate operations are signed by an injected [`Signer`]; a local secp256k1 signer is
//! available behind the `keys` feature.
//!
//! ```rust,ignore
//! let registrar = Registrar::new(Config::new().with_network("test"));
//! let op = registrar.create(&recovery_key, &update_key, &document)?;
//! let did = registrar.long_form_did(&op)?;
//! ```
//!
//! Nothing is stored, sent or resolved: submitting operations to a node is up to the caller.

mod config;
mod create;
mod deactivate;
mod did;
mod operation;
mod recover;
mod registrar;
mod update;

pub use sidetree_core::error::{Err, Error, ErrorKind};
pub use sidetree_core::{
    Algorithm, Document, Endpoint, Header, Jwk, KeyPurpose, KeyRole, Patch, PatchAction,
    PublicKey, Result, Service, Signer,
};
#[cfg(feature = "keys")]
pub use sidetree_keys as keys;
pub use sidetree_core::{hashing, validate};

pub use self::config::*;
pub use self::did::{long_form_did, short_form_did, split_long_form_did, unique_suffix};
pub use self::operation::*;
pub use self::recover::*;
pub use self::registrar::*;
pub use self::update::*;
