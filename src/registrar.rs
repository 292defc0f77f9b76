//! # Registrar
//!
//! Builds Sidetree operations for a fixed [`Config`]. Builders are pure: they validate their
//! inputs, compute commitments and hashes, and (for update, recover and deactivate) ask the
//! injected [`Signer`] to sign. Nothing is stored or sent.

use serde::Serialize;
use sidetree_core::hashing::{check, hash_commitment, hash_data};
use sidetree_core::validate::{check_delta_size, check_operation_key};
use sidetree_core::{Algorithm, Header, Jwk, KeyRole, Patch, Result, Signer};

use crate::config::Config;
use crate::operation::Delta;

/// Operation builder.
#[derive(Clone, Debug, Default)]
pub struct Registrar {
    config: Config,
}

impl Registrar {
    /// Create a registrar with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration operations are built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Check a DID suffix is a multihash computed with the configured algorithm.
    pub(crate) fn check_suffix(&self, did_suffix: &str) -> Result<()> {
        check(did_suffix, self.config.hash_algorithm, "didSuffix")
    }

    /// Check a public operation key.
    pub(crate) fn check_key(key: &Jwk) -> Result<()> {
        check_operation_key(key, KeyRole::Public)
    }

    /// Single hash of a key: the value disclosed when the key is used.
    pub(crate) fn reveal_value(&self, key: &Jwk) -> Result<String> {
        hash_data(key, self.config.hash_algorithm)
    }

    /// Double hash of a key: the value published now and satisfied by a later reveal.
    pub(crate) fn commitment(&self, key: &Jwk) -> Result<String> {
        hash_commitment(key, self.config.hash_algorithm)
    }

    /// Assemble a delta committing to `next_update_key`, check its size and hash it.
    pub(crate) fn delta(
        &self, patches: Vec<Patch>, next_update_key: &Jwk,
    ) -> Result<(Delta, String)> {
        let delta = Delta {
            patches,
            update_commitment: self.commitment(next_update_key)?,
        };
        check_delta_size(&delta, self.config.max_delta_size)?;
        let delta_hash = hash_data(&delta, self.config.hash_algorithm)?;
        Ok((delta, delta_hash))
    }

    /// Sign `payload` with an ES256K header.
    pub(crate) async fn sign<T: Serialize + Sync>(
        signer: &impl Signer, payload: &T,
    ) -> Result<String> {
        let header = Header {
            alg: signer.algorithm(Some(Algorithm::Secp256k1))?,
        };
        signer.sign(&header, payload).await
    }
}
