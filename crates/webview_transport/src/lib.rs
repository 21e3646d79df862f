//! Webview-side message transport for the extension UI surface.
//!
//! [`WebviewTransport`] presents one `post_message` / `get_state` / `set_state` API regardless of
//! the substrate the UI surface runs on:
//! - native mode: a host-supplied bridge handle acquired exactly once;
//! - standalone mode: a browser-global flag plus a globally registered send function;
//! - degraded mode: no delivery channel, messages are logged and dropped.
//!
//! Platform probing is split under `bridge/`:
//! - `bridge::interop` routes to `wasm32` (`window` globals, `localStorage`) or non-wasm
//!   fallbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod config;
pub mod environment;
pub mod error;
pub mod native;
pub mod storage;
pub mod transport;

pub use config::{TransportConfig, DEFAULT_STATE_KEY};
pub use environment::{BrowserEnvironment, HostEnvironment, MemoryEnvironment, StandaloneSender};
pub use error::TransportError;
pub use native::{MemoryNativeApi, NativeWebviewApi};
pub use storage::{
    platform_state_storage, platform_state_storage_in, FileStateStorage, LocalStateStorage,
    MemoryStateStorage, StateStorage,
};
pub use transport::{
    webview_transport, MessageTransport, TransportBackend, TransportMode, WebviewTransport,
};
