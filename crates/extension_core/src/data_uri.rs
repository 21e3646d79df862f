//! Parsing for `data:image/<format>;base64,<payload>` URIs.

use std::sync::LazyLock;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use regex::Regex;
use thiserror::Error;

static IMAGE_DATA_URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:image/([a-zA-Z]+);base64,(.+)$")
        .expect("data_uri: static regex pattern must compile")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a string is not an acceptable image data URI.
pub enum DataUriError {
    /// The string does not have the `data:image/<format>;base64,<payload>` shape.
    #[error("not an image data URI")]
    Malformed,
    /// The payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(String),
}

/// Decoded image carried by a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDataUri {
    /// Image format token from the media type (`png`, `jpeg`, ...), as written.
    pub format: String,
    /// Decoded image bytes.
    pub bytes: Vec<u8>,
}

impl ImageDataUri {
    /// Parses and decodes an image data URI.
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError::Malformed`] for anything not matching the expected shape and
    /// [`DataUriError::InvalidPayload`] when the payload does not decode.
    pub fn parse(data_uri: &str) -> Result<Self, DataUriError> {
        let captures = IMAGE_DATA_URI_RE
            .captures(data_uri)
            .ok_or(DataUriError::Malformed)?;
        let format = captures[1].to_string();
        let bytes = B64
            .decode(&captures[2])
            .map_err(|err| DataUriError::InvalidPayload(err.to_string()))?;
        Ok(Self { format, bytes })
    }
}
