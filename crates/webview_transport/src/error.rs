//! Transport error type.
//!
//! None of these surface through [`crate::WebviewTransport`]; the wrapper logs them and degrades.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure inside a transport backend or state storage.
pub enum TransportError {
    /// A message or state value could not be converted for the host.
    #[error("serialization failed: {0}")]
    Serialize(String),
    /// The host bridge rejected a call.
    #[error("host bridge call failed: {0}")]
    Host(String),
    /// Durable state storage is missing or rejected a write.
    #[error("state storage failed: {0}")]
    Storage(String),
}
