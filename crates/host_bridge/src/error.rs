//! Error taxonomy for registry access and host bridge calls.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Registry misconfiguration errors. These are programmer errors and propagate to the caller.
pub enum HostProviderError {
    /// A capability was requested before [`crate::HostProviderRegistry::initialize`] ran.
    #[error("Host providers not initialized")]
    Uninitialized,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure reported by a host integration while executing a bridge or editor request.
pub enum HostBridgeError {
    /// The active host does not implement the requested operation.
    #[error("host operation unavailable: {operation}")]
    Unavailable {
        /// Stable operation label used in diagnostics.
        operation: &'static str,
    },
    /// The host attempted the operation and reported a failure.
    #[error("host rejected {operation}: {reason}")]
    Rejected {
        /// Stable operation label used in diagnostics.
        operation: &'static str,
        /// Host-supplied failure description.
        reason: String,
    },
}

impl HostBridgeError {
    /// Builds a [`HostBridgeError::Rejected`] value.
    pub fn rejected(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Rejected {
            operation,
            reason: reason.into(),
        }
    }

    /// Returns the operation label carried by the error.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Unavailable { operation } | Self::Rejected { operation, .. } => operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_message_matches_host_contract() {
        assert_eq!(
            HostProviderError::Uninitialized.to_string(),
            "Host providers not initialized"
        );
    }

    #[test]
    fn bridge_error_display_and_operation_label() {
        let err = HostBridgeError::rejected("showTextDocument", "no such file");
        assert_eq!(err.operation(), "showTextDocument");
        assert_eq!(
            err.to_string(),
            "host rejected showTextDocument: no such file"
        );

        let err = HostBridgeError::Unavailable {
            operation: "closeTab",
        };
        assert_eq!(err.to_string(), "host operation unavailable: closeTab");
    }
}
