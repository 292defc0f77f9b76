//! Services are used to express ways of communicating with the DID subject or associated entities.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Service description.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Identifier for the service, unique within the document.
    pub id: String,
    /// The type of service.
    #[serde(rename = "type")]
    pub type_: String,
    /// Location of the service.
    pub service_endpoint: Endpoint,
}

/// A service endpoint is either a URI or a map of values. Arrays deserialize so that they can be
/// reported by validation, but are never accepted.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// Location of the service as a URI.
    Url(String),
    /// Rejected by validation.
    Set(Vec<Value>),
    /// Structured endpoint, for example `{"origins": ["https://example.com/"]}`.
    Map(Map<String, Value>),
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::Url(String::new())
    }
}

impl From<&str> for Endpoint {
    fn from(url: &str) -> Self {
        Self::Url(url.to_string())
    }
}
