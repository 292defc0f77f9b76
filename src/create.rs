//! # Create
//!
//! Create a new DID: commit to the first recovery and update keys and carry the initial
//! document in a single `replace` patch.

use sidetree_core::validate::check_document;
use sidetree_core::{Document, Jwk, Patch, Result};

use crate::operation::{CreateOperation, SuffixData};
use crate::registrar::Registrar;

impl Registrar {
    /// Build a create operation.
    ///
    /// # Arguments
    ///
    /// * `recovery_key` - Public key authorizing the first recover or deactivate.
    /// * `update_key` - Public key authorizing the first update.
    /// * `document` - Initial keys and services.
    ///
    /// # Errors
    ///
    /// Fails if either key or any document key or service is invalid, or if the delta exceeds the
    /// configured maximum size.
    pub fn create(
        &self, recovery_key: &Jwk, update_key: &Jwk, document: &Document,
    ) -> Result<CreateOperation> {
        Self::check_key(recovery_key)?;
        Self::check_key(update_key)?;
        check_document(document)?;

        let replace = Patch::Replace {
            document: document.clone(),
        };
        let (delta, delta_hash) = self.delta(vec![replace], update_key)?;

        let suffix_data = SuffixData {
            delta_hash,
            recovery_commitment: self.commitment(recovery_key)?,
        };
        tracing::debug!("built create operation");

        Ok(CreateOperation { suffix_data, delta })
    }

    /// Build a create operation and return its long-form DID.
    ///
    /// # Errors
    ///
    /// Fails for the same reasons as [`Registrar::create`].
    pub fn create_long_form_did(
        &self, recovery_key: &Jwk, update_key: &Jwk, document: &Document,
    ) -> Result<String> {
        let op = self.create(recovery_key, update_key, document)?;
        self.long_form_did(&op)
    }
}
