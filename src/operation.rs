//! # Operations
//!
//! The four operation records produced by [`Registrar`](crate::Registrar), and the payloads that
//! are signed to authorize them. Field order matches the wire format.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use sidetree_core::{Jwk, Patch};

/// Type of DID operation.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationType {
    /// Register a new DID.
    Create,
    /// Change keys or services of an existing DID.
    Update,
    /// Replace the document and rotate the recovery key.
    Recover,
    /// Permanently disable a DID.
    Deactivate,
}

impl Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Recover => write!(f, "recover"),
            Self::Deactivate => write!(f, "deactivate"),
        }
    }
}

/// An operation in wire form: the operation record with its `type`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Operation {
    /// Create operation.
    Create(CreateOperation),
    /// Update operation.
    Update(UpdateOperation),
    /// Recover operation.
    Recover(RecoverOperation),
    /// Deactivate operation.
    Deactivate(DeactivateOperation),
}

impl Operation {
    /// The type of this operation.
    #[must_use]
    pub const fn operation_type(&self) -> OperationType {
        match self {
            Self::Create(_) => OperationType::Create,
            Self::Update(_) => OperationType::Update,
            Self::Recover(_) => OperationType::Recover,
            Self::Deactivate(_) => OperationType::Deactivate,
        }
    }
}

impl From<CreateOperation> for Operation {
    fn from(op: CreateOperation) -> Self {
        Self::Create(op)
    }
}

impl From<UpdateOperation> for Operation {
    fn from(op: UpdateOperation) -> Self {
        Self::Update(op)
    }
}

impl From<RecoverOperation> for Operation {
    fn from(op: RecoverOperation) -> Self {
        Self::Recover(op)
    }
}

impl From<DeactivateOperation> for Operation {
    fn from(op: DeactivateOperation) -> Self {
        Self::Deactivate(op)
    }
}

/// Binds a create operation to its delta and its first recovery key.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuffixData {
    /// Hash of the canonical delta.
    pub delta_hash: String,
    /// Commitment to the recovery key.
    pub recovery_commitment: String,
}

/// Document changes plus the commitment to the next update key.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delta {
    /// Patches, applied in order.
    pub patches: Vec<Patch>,
    /// Commitment to the next update key.
    pub update_commitment: String,
}

/// Create operation. Also the initial state embedded in a long-form DID.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOperation {
    /// Suffix data; hashes to the DID unique suffix.
    pub suffix_data: SuffixData,
    /// Initial document state.
    pub delta: Delta,
}

/// Update operation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOperation {
    /// Unique suffix of the DID being updated.
    pub did_suffix: String,
    /// Hash of the current update key.
    pub reveal_value: String,
    /// Document changes.
    pub delta: Delta,
    /// Compact JWS over [`UpdateSignedData`].
    pub signed_data: String,
}

/// Recover operation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverOperation {
    /// Unique suffix of the DID being recovered.
    pub did_suffix: String,
    /// Hash of the current recovery key.
    pub reveal_value: String,
    /// Replacement document state.
    pub delta: Delta,
    /// Compact JWS over [`RecoverSignedData`].
    pub signed_data: String,
}

/// Deactivate operation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivateOperation {
    /// Unique suffix of the DID being deactivated.
    pub did_suffix: String,
    /// Hash of the current recovery key.
    pub reveal_value: String,
    /// Compact JWS over [`DeactivateSignedData`].
    pub signed_data: String,
}

/// Payload signed by the current update key.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSignedData {
    /// Current update key.
    pub update_key: Jwk,
    /// Hash of the canonical delta.
    pub delta_hash: String,
}

/// Payload signed by the current recovery key.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverSignedData {
    /// Commitment to the next recovery key.
    pub recovery_commitment: String,
    /// Current recovery key.
    pub recovery_key: Jwk,
    /// Hash of the canonical delta.
    pub delta_hash: String,
}

/// Payload signed by the current recovery key.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivateSignedData {
    /// Unique suffix of the DID being deactivated.
    pub did_suffix: String,
    /// Current recovery key.
    pub recovery_key: Jwk,
}
