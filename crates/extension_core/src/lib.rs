//! Host-agnostic extension features.
//!
//! Everything here reaches the host through [`host_bridge::HostProviderRegistry`] and the
//! [`host_bridge::EditorHost`] seam, never through host-specific modules. Host-facing steps are
//! guarded boundaries: failures turn into user-visible notifications, and only registry
//! misconfiguration propagates to the caller.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod data_uri;
pub mod open;

pub use config::OpenHelperConfig;
pub use data_uri::{DataUriError, ImageDataUri};
pub use open::{
    DedupOutcome, FileOpener, OpenError, OpenOutcome, FILE_OPEN_FAILED_MESSAGE,
    INVALID_DATA_URI_MESSAGE,
};
