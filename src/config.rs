//! # Configuration
//!
//! Settings shared by every operation built by a [`Registrar`](crate::Registrar). A `Config` is
//! fixed when the registrar is constructed.

use serde::{Deserialize, Serialize};
use sidetree_core::hashing::SHA2_256;

/// DID method name used when none is configured.
pub const DEFAULT_METHOD: &str = "ada";

/// Network label that is omitted from DIDs.
pub const MAINNET: &str = "mainnet";

/// Default maximum canonical delta size in bytes.
pub const DEFAULT_MAX_DELTA_SIZE: usize = 1000;

/// Registrar configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// DID method name, the `<method>` in `did:<method>:<suffix>`.
    pub method: String,
    /// Network label. `None` or `mainnet` is omitted from DIDs.
    pub network: Option<String>,
    /// Multihash code of the hash algorithm.
    pub hash_algorithm: u64,
    /// Maximum canonical delta size in bytes.
    pub max_delta_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: DEFAULT_METHOD.to_string(),
            network: None,
            hash_algorithm: SHA2_256,
            max_delta_size: DEFAULT_MAX_DELTA_SIZE,
        }
    }
}

impl Config {
    /// Default configuration: method `ada` on mainnet, SHA2-256, 1000-byte deltas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the DID method name.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set the network label.
    #[must_use]
    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    /// Set the maximum canonical delta size.
    #[must_use]
    pub const fn with_max_delta_size(mut self, max_delta_size: usize) -> Self {
        self.max_delta_size = max_delta_size;
        self
    }

    /// The network label to include in DIDs, if any.
    #[must_use]
    pub fn did_network(&self) -> Option<&str> {
        self.network.as_deref().filter(|n| *n != MAINNET)
    }
}
