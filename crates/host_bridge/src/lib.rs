//! Host-provider contracts shared by extension core logic and host integrations.
//!
//! Core logic never imports host-specific modules. It asks a [`HostProviderRegistry`] for a
//! webview provider or a host bridge client and trusts the result, which lets the same core be
//! paired with a native editor-extension host or a standalone browser host at startup. Concrete
//! host integrations implement the [`WindowClient`], [`EditorHost`], and [`WebviewProvider`]
//! seams defined here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bridge;
pub mod editor;
pub mod error;
pub mod path;
pub mod registry;
pub mod time;
pub mod webview;
pub mod window;

pub use bridge::{HostBridgeClientProvider, HostBridgeClients};
pub use editor::{
    EditorHost, EditorHostFuture, EditorTab, MemoryEditorHost, NoopEditorHost, TabGroup, TabInput,
    TextDocument, ViewColumn,
};
pub use error::{HostBridgeError, HostProviderError};
pub use path::{normalize_host_path, paths_equal, paths_equal_with};
pub use registry::{HostProviderRegistry, WebviewProviderFactory};
pub use time::{next_unique_timestamp_ms, unix_time_ms_now};
pub use webview::{
    ExtensionContext, MemoryOutputChannel, NoopOutputChannel, OutputChannel, WebviewProvider,
    WebviewProviderType,
};
pub use window::{
    HostBridgeFuture, NoopWindowClient, RecordingWindowClient, ShowMessageOptions,
    ShowMessageRequest, ShowMessageResponse, ShowMessageType, ShowTextDocumentOptions,
    ShowTextDocumentRequest, TextEditorInfo, WindowClient,
};
