//! Opening files and pasted images through the host abstraction.
//!
//! Both operations end in exactly one of two states: the view was shown, or one error
//! notification was issued. Essential steps report failures through [`OpenError`]; the tab
//! de-duplication step is best-effort and only logs.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use host_bridge::{
    paths_equal, EditorHost, HostBridgeError, HostProviderError, HostProviderRegistry,
    ShowMessageRequest, ShowTextDocumentOptions, ShowTextDocumentRequest, ViewColumn,
    WindowClient,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{ImageDataUri, OpenHelperConfig};

/// Notification text for data URIs that fail to parse.
pub const INVALID_DATA_URI_MESSAGE: &str = "Invalid data URI format";

/// Notification text for any failure while opening a file.
pub const FILE_OPEN_FAILED_MESSAGE: &str = "Could not open file!";

/// Final state of an open operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The host was asked to show the view and accepted.
    Shown {
        /// Path of the file that was shown.
        path: PathBuf,
    },
    /// An error notification was issued instead.
    ErrorReported {
        /// Text of the notification.
        message: String,
    },
}

/// Failure of an essential open step.
#[derive(Debug, Error)]
pub enum OpenError {
    /// Writing the decoded image failed.
    #[error("failed to write {}: {source}", path.display())]
    WriteTempFile {
        /// Target temp file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A host call failed.
    #[error(transparent)]
    Host(#[from] HostBridgeError),
}

/// Result of the best-effort duplicate-tab check in [`FileOpener::open_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupOutcome {
    /// No tab shows the target document.
    NotOpen,
    /// A tab exists but no text editor is active, so there is no column to compare.
    KeptNoActiveEditor,
    /// The existing tab already sits in the active column.
    KeptActiveColumn,
    /// The existing tab has unsaved changes.
    KeptDirty,
    /// The existing tab in another column was closed.
    Closed {
        /// Column the closed tab occupied.
        view_column: ViewColumn,
    },
}

/// Opens files and images using only the registry and the editor host seam.
pub struct FileOpener<'a> {
    registry: &'a HostProviderRegistry,
    editor: &'a dyn EditorHost,
    config: OpenHelperConfig,
}

impl<'a> FileOpener<'a> {
    /// Creates an opener bound to the host capabilities.
    pub fn new(
        registry: &'a HostProviderRegistry,
        editor: &'a dyn EditorHost,
        config: OpenHelperConfig,
    ) -> Self {
        Self {
            registry,
            editor,
            config,
        }
    }

    /// Decodes an image data URI to a temp file and asks the host to open it.
    ///
    /// Parse failures report [`INVALID_DATA_URI_MESSAGE`] without touching the filesystem.
    /// Write or open failures report `Error opening image: <error>`. The temp file is left in
    /// place for the host/OS to reclaim.
    ///
    /// The temp file is written synchronously on the calling thread before the host open is
    /// awaited; only the host call yields.
    ///
    /// # Errors
    ///
    /// Returns [`HostProviderError::Uninitialized`] when the registry has not been initialized.
    pub async fn open_image(&self, data_uri: &str) -> Result<OpenOutcome, HostProviderError> {
        let bridge = self.registry.host_bridge_provider()?;
        let window = bridge.window_client();

        let image = match ImageDataUri::parse(data_uri) {
            Ok(image) => image,
            Err(err) => {
                debug!(error = %err, "rejected image data uri");
                return Ok(report_error(window, INVALID_DATA_URI_MESSAGE).await);
            }
        };

        match self.write_and_open_image(&image).await {
            Ok(path) => Ok(OpenOutcome::Shown { path }),
            Err(err) => {
                warn!(error = %err, format = %image.format, "could not open image");
                Ok(report_error(window, format!("Error opening image: {err}")).await)
            }
        }
    }

    /// Opens a text document as a non-preview tab, closing a clean duplicate tab elsewhere first.
    ///
    /// The duplicate check never blocks the open. Any failure while opening reports
    /// [`FILE_OPEN_FAILED_MESSAGE`]; the underlying error is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`HostProviderError::Uninitialized`] when the registry has not been initialized.
    pub async fn open_file(&self, absolute_path: &Path) -> Result<OpenOutcome, HostProviderError> {
        let bridge = self.registry.host_bridge_provider()?;
        let window = bridge.window_client();

        match self.close_duplicate_tab(absolute_path).await {
            Ok(outcome) => debug!(?outcome, path = %absolute_path.display(), "duplicate tab check"),
            Err(err) => debug!(error = %err, "duplicate tab check skipped"),
        }

        match self.open_and_show(window, absolute_path).await {
            Ok(path) => Ok(OpenOutcome::Shown { path }),
            Err(err) => {
                warn!(error = %err, path = %absolute_path.display(), "could not open file");
                Ok(report_error(window, FILE_OPEN_FAILED_MESSAGE).await)
            }
        }
    }

    async fn write_and_open_image(&self, image: &ImageDataUri) -> Result<PathBuf, OpenError> {
        let path = self.config.temp_image_path(&image.format);
        // Blocking write; the only filesystem access in this crate.
        fs::write(&path, &image.bytes).map_err(|source| OpenError::WriteTempFile {
            path: path.clone(),
            source,
        })?;
        self.editor.open_resource(&path).await?;
        debug!(path = %path.display(), "opened image");
        Ok(path)
    }

    /// Closes a clean tab showing `target` when it sits outside the active column.
    async fn close_duplicate_tab(&self, target: &Path) -> Result<DedupOutcome, HostBridgeError> {
        let groups = self.editor.tab_groups()?;
        let existing = groups.iter().find_map(|group| {
            group
                .tabs
                .iter()
                .find(|tab| tab.text_path().is_some_and(|path| paths_equal(path, target)))
                .map(|tab| (group.view_column, tab))
        });
        let Some((tab_column, tab)) = existing else {
            return Ok(DedupOutcome::NotOpen);
        };
        let Some(active_column) = self.editor.active_view_column() else {
            return Ok(DedupOutcome::KeptNoActiveEditor);
        };
        if active_column == tab_column {
            return Ok(DedupOutcome::KeptActiveColumn);
        }
        if tab.is_dirty {
            return Ok(DedupOutcome::KeptDirty);
        }
        self.editor.close_tab(tab).await?;
        Ok(DedupOutcome::Closed {
            view_column: tab_column,
        })
    }

    async fn open_and_show(
        &self,
        window: &dyn WindowClient,
        absolute_path: &Path,
    ) -> Result<PathBuf, OpenError> {
        let document = self.editor.open_text_document(absolute_path).await?;
        window
            .show_text_document(ShowTextDocumentRequest {
                path: document.path.to_string_lossy().into_owned(),
                options: ShowTextDocumentOptions {
                    preview: false,
                    ..ShowTextDocumentOptions::default()
                },
            })
            .await?;
        Ok(document.path)
    }
}

/// Issues one error notification. Delivery failures are logged, never propagated.
async fn report_error(window: &dyn WindowClient, message: impl Into<String>) -> OpenOutcome {
    let message = message.into();
    if let Err(err) = window
        .show_message(ShowMessageRequest::error(message.clone()))
        .await
    {
        warn!(error = %err, "error notification could not be delivered");
    }
    OpenOutcome::ErrorReported { message }
}
