//! Transport configuration.

use serde::{Deserialize, Serialize};

/// Storage key holding the JSON-serialized UI state outside native mode.
pub const DEFAULT_STATE_KEY: &str = "vscodeState";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Tunables for [`crate::WebviewTransport`].
pub struct TransportConfig {
    /// Storage key for persisted UI state in standalone and degraded modes.
    pub state_key: String,
    /// Number of characters of a standalone message included in debug logs.
    pub log_preview_chars: usize,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
            log_preview_chars: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: TransportConfig =
            serde_json::from_str(r#"{"logPreviewChars": 80}"#).expect("parse config");
        assert_eq!(config.state_key, DEFAULT_STATE_KEY);
        assert_eq!(config.log_preview_chars, 80);
    }
}
