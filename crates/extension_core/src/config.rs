//! Open-helper configuration.

use std::path::PathBuf;

use host_bridge::next_unique_timestamp_ms;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Settings for [`crate::FileOpener`].
pub struct OpenHelperConfig {
    /// Directory receiving decoded images.
    pub temp_dir: PathBuf,
    /// File-name prefix for decoded images.
    pub image_file_prefix: String,
}

impl Default for OpenHelperConfig {
    fn default() -> Self {
        Self {
            temp_dir: std::env::temp_dir(),
            image_file_prefix: "temp_image".to_string(),
        }
    }
}

impl OpenHelperConfig {
    /// Config writing decoded images to `temp_dir`.
    pub fn with_temp_dir(temp_dir: impl Into<PathBuf>) -> Self {
        Self {
            temp_dir: temp_dir.into(),
            ..Self::default()
        }
    }

    /// Returns a fresh `<prefix>_<timestamp>.<format>` path inside the temp dir.
    pub fn temp_image_path(&self, format: &str) -> PathBuf {
        self.temp_dir.join(format!(
            "{}_{}.{format}",
            self.image_file_prefix,
            next_unique_timestamp_ms()
        ))
    }
}
