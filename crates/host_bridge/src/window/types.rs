//! Plain request/response records exchanged with the host window client.

use serde::{Deserialize, Serialize};

/// Severity of a host notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShowMessageType {
    /// Informational message.
    Information,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

/// Optional presentation hints for [`ShowMessageRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowMessageOptions {
    /// Action buttons offered alongside the message.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
    /// Whether the host should render the message as a modal dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modal: Option<bool>,
    /// Secondary detail text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Request to render a notification through the host's native mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowMessageRequest {
    /// Message severity.
    #[serde(rename = "type")]
    pub kind: ShowMessageType,
    /// Message text.
    pub message: String,
    /// Optional presentation hints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ShowMessageOptions>,
}

impl ShowMessageRequest {
    /// Builds a request without presentation options.
    pub fn new(kind: ShowMessageType, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            options: None,
        }
    }

    /// Builds an information request.
    pub fn information(message: impl Into<String>) -> Self {
        Self::new(ShowMessageType::Information, message)
    }

    /// Builds a warning request.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ShowMessageType::Warning, message)
    }

    /// Builds an error request.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ShowMessageType::Error, message)
    }
}

/// Host response to [`ShowMessageRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowMessageResponse {
    /// Label of the action item the user picked, if any.
    #[serde(default)]
    pub selected_option: Option<String>,
}

/// Presentation options for [`ShowTextDocumentRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTextDocumentOptions {
    /// Open as a preview tab that is replaced by the next preview.
    pub preview: bool,
    /// Keep focus in the current view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserve_focus: Option<bool>,
    /// Target view column; the host picks one when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_column: Option<i32>,
}

/// Request to open or focus an editor-like view for a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTextDocumentRequest {
    /// Absolute filesystem path of the document.
    pub path: String,
    /// Presentation options.
    #[serde(default)]
    pub options: ShowTextDocumentOptions,
}

/// Host description of the editor that ended up showing a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEditorInfo {
    /// Path of the document shown in the editor.
    pub document_path: String,
    /// View column of the editor, when the host reports one.
    #[serde(default)]
    pub view_column: Option<i32>,
    /// Whether the editor is the active one.
    #[serde(default)]
    pub is_active: bool,
}
