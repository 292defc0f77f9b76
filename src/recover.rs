//! # Recover
//!
//! Replace the document of an existing DID and rotate both the recovery and update keys,
//! authorized by the current recovery key.

use sidetree_core::validate::check_document;
use sidetree_core::{Document, Jwk, Patch, Result, Signer};

use crate::operation::{RecoverOperation, RecoverSignedData};
use crate::registrar::Registrar;

/// Inputs to a recover operation.
#[derive(Clone, Debug, Default)]
pub struct RecoverRequest {
    /// Unique suffix of the DID to recover.
    pub did_suffix: String,
    /// Current recovery key (public). The signer must hold its private key.
    pub recovery_key: Jwk,
    /// Public key the next recover or deactivate will be authorized with.
    pub next_recovery_key: Jwk,
    /// Public key the next update will be authorized with.
    pub next_update_key: Jwk,
    /// Replacement keys and services.
    pub document: Document,
}

impl Registrar {
    /// Build a recover operation.
    ///
    /// # Errors
    ///
    /// Fails if the suffix, any of the three keys, or any document key or service is invalid, if
    /// the delta exceeds the configured maximum size, or if the signer fails.
    pub async fn recover(
        &self, request: &RecoverRequest, signer: &impl Signer,
    ) -> Result<RecoverOperation> {
        self.check_suffix(&request.did_suffix)?;
        Self::check_key(&request.recovery_key)?;
        Self::check_key(&request.next_recovery_key)?;
        Self::check_key(&request.next_update_key)?;
        check_document(&request.document)?;

        let replace = Patch::Replace {
            document: request.document.clone(),
        };
        let (delta, delta_hash) = self.delta(vec![replace], &request.next_update_key)?;

        let signed = RecoverSignedData {
            recovery_commitment: self.commitment(&request.next_recovery_key)?,
            recovery_key: request.recovery_key.clone(),
            delta_hash,
        };
        let signed_data = Self::sign(signer, &signed).await?;
        tracing::debug!("built recover operation for {}", request.did_suffix);

        Ok(RecoverOperation {
            did_suffix: request.did_suffix.clone(),
            reveal_value: self.reveal_value(&request.recovery_key)?,
            delta,
            signed_data,
        })
    }
}
