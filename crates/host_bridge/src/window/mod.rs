//! Window-operations client: the minimum sub-client every host bridge exposes.

mod client;
mod types;

pub use client::{HostBridgeFuture, NoopWindowClient, RecordingWindowClient, WindowClient};
pub use types::{
    ShowMessageOptions, ShowMessageRequest, ShowMessageResponse, ShowMessageType,
    ShowTextDocumentOptions, ShowTextDocumentRequest, TextEditorInfo,
};
