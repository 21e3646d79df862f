//! Editor host seam: the tab/group and document APIs core helpers need from the host.

use std::{
    cell::RefCell,
    future::Future,
    path::{Path, PathBuf},
    pin::Pin,
    rc::Rc,
};

use crate::{paths_equal, HostBridgeError};

/// Object-safe boxed future used by [`EditorHost`].
pub type EditorHostFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// One-based editor column index as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewColumn(pub u32);

/// What a tab is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabInput {
    /// A text document backed by a filesystem path.
    Text {
        /// Path of the document.
        path: PathBuf,
    },
    /// Any other tab kind (webviews, diff views, settings).
    Other,
}

/// Snapshot of one editor tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTab {
    /// Tab label as shown by the host.
    pub label: String,
    /// Tab content.
    pub input: TabInput,
    /// Whether the tab has unsaved changes.
    pub is_dirty: bool,
}

impl EditorTab {
    /// Builds a clean text tab for `path`, labelled with its file name.
    pub fn text(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            label,
            input: TabInput::Text { path },
            is_dirty: false,
        }
    }

    /// Marks the tab as having unsaved changes.
    pub fn dirty(mut self) -> Self {
        self.is_dirty = true;
        self
    }

    /// Returns the document path for text tabs.
    pub fn text_path(&self) -> Option<&Path> {
        match &self.input {
            TabInput::Text { path } => Some(path),
            TabInput::Other => None,
        }
    }
}

/// Snapshot of one tab group and the column it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    /// Column the group occupies.
    pub view_column: ViewColumn,
    /// Tabs in display order.
    pub tabs: Vec<EditorTab>,
}

/// Document handle returned by [`EditorHost::open_text_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    /// Resolved filesystem path of the document.
    pub path: PathBuf,
}

/// Host editor operations consumed by core helpers.
pub trait EditorHost {
    /// Returns a snapshot of every tab group.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot enumerate tabs.
    fn tab_groups(&self) -> Result<Vec<TabGroup>, HostBridgeError>;

    /// Returns the view column of the active text editor, if any.
    fn active_view_column(&self) -> Option<ViewColumn>;

    /// Closes a tab previously returned by [`Self::tab_groups`].
    fn close_tab<'a>(&'a self, tab: &'a EditorTab)
        -> EditorHostFuture<'a, Result<(), HostBridgeError>>;

    /// Loads a text document without showing it.
    fn open_text_document<'a>(
        &'a self,
        path: &'a Path,
    ) -> EditorHostFuture<'a, Result<TextDocument, HostBridgeError>>;

    /// Opens a resource with the host's default viewer (used for images).
    fn open_resource<'a>(&'a self, path: &'a Path)
        -> EditorHostFuture<'a, Result<(), HostBridgeError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Editor host for environments without editor tabs. Every document operation is unavailable.
pub struct NoopEditorHost;

impl EditorHost for NoopEditorHost {
    fn tab_groups(&self) -> Result<Vec<TabGroup>, HostBridgeError> {
        Ok(Vec::new())
    }

    fn active_view_column(&self) -> Option<ViewColumn> {
        None
    }

    fn close_tab<'a>(
        &'a self,
        _tab: &'a EditorTab,
    ) -> EditorHostFuture<'a, Result<(), HostBridgeError>> {
        Box::pin(async {
            Err(HostBridgeError::Unavailable {
                operation: "closeTab",
            })
        })
    }

    fn open_text_document<'a>(
        &'a self,
        _path: &'a Path,
    ) -> EditorHostFuture<'a, Result<TextDocument, HostBridgeError>> {
        Box::pin(async {
            Err(HostBridgeError::Unavailable {
                operation: "openTextDocument",
            })
        })
    }

    fn open_resource<'a>(
        &'a self,
        _path: &'a Path,
    ) -> EditorHostFuture<'a, Result<(), HostBridgeError>> {
        Box::pin(async {
            Err(HostBridgeError::Unavailable {
                operation: "openResource",
            })
        })
    }
}

#[derive(Debug, Default)]
struct MemoryEditorState {
    groups: Vec<TabGroup>,
    active_column: Option<ViewColumn>,
    closed: Vec<EditorTab>,
    opened_documents: Vec<PathBuf>,
    opened_resources: Vec<PathBuf>,
    tab_groups_failure: Option<String>,
    close_failure: Option<String>,
    open_document_failure: Option<String>,
    open_resource_failure: Option<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory editor host with scripted tabs and failures. Clones share state.
pub struct MemoryEditorHost {
    inner: Rc<RefCell<MemoryEditorState>>,
}

impl MemoryEditorHost {
    /// Appends a tab group occupying `view_column`.
    pub fn with_tab_group(self, view_column: ViewColumn, tabs: Vec<EditorTab>) -> Self {
        self.inner
            .borrow_mut()
            .groups
            .push(TabGroup { view_column, tabs });
        self
    }

    /// Sets the column of the active text editor.
    pub fn with_active_view_column(self, view_column: ViewColumn) -> Self {
        self.inner.borrow_mut().active_column = Some(view_column);
        self
    }

    /// Makes tab enumeration fail with `reason`.
    pub fn fail_tab_groups(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().tab_groups_failure = Some(reason.into());
    }

    /// Makes tab closing fail with `reason`.
    pub fn fail_close_tab(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().close_failure = Some(reason.into());
    }

    /// Makes document loading fail with `reason`.
    pub fn fail_open_text_document(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().open_document_failure = Some(reason.into());
    }

    /// Makes resource opening fail with `reason`.
    pub fn fail_open_resource(&self, reason: impl Into<String>) {
        self.inner.borrow_mut().open_resource_failure = Some(reason.into());
    }

    /// Tabs closed through [`EditorHost::close_tab`].
    pub fn closed_tabs(&self) -> Vec<EditorTab> {
        self.inner.borrow().closed.clone()
    }

    /// Paths passed to successful [`EditorHost::open_text_document`] calls.
    pub fn opened_documents(&self) -> Vec<PathBuf> {
        self.inner.borrow().opened_documents.clone()
    }

    /// Paths passed to successful [`EditorHost::open_resource`] calls.
    pub fn opened_resources(&self) -> Vec<PathBuf> {
        self.inner.borrow().opened_resources.clone()
    }
}

impl EditorHost for MemoryEditorHost {
    fn tab_groups(&self) -> Result<Vec<TabGroup>, HostBridgeError> {
        let state = self.inner.borrow();
        match &state.tab_groups_failure {
            Some(reason) => Err(HostBridgeError::rejected("tabGroups", reason.clone())),
            None => Ok(state.groups.clone()),
        }
    }

    fn active_view_column(&self) -> Option<ViewColumn> {
        self.inner.borrow().active_column
    }

    fn close_tab<'a>(
        &'a self,
        tab: &'a EditorTab,
    ) -> EditorHostFuture<'a, Result<(), HostBridgeError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            if let Some(reason) = &state.close_failure {
                return Err(HostBridgeError::rejected("closeTab", reason.clone()));
            }
            let target = tab.text_path();
            for group in &mut state.groups {
                group.tabs.retain(|candidate| {
                    !matches!(
                        (candidate.text_path(), target),
                        (Some(left), Some(right)) if paths_equal(left, right)
                    )
                });
            }
            state.closed.push(tab.clone());
            Ok(())
        })
    }

    fn open_text_document<'a>(
        &'a self,
        path: &'a Path,
    ) -> EditorHostFuture<'a, Result<TextDocument, HostBridgeError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            if let Some(reason) = &state.open_document_failure {
                return Err(HostBridgeError::rejected("openTextDocument", reason.clone()));
            }
            state.opened_documents.push(path.to_path_buf());
            Ok(TextDocument {
                path: path.to_path_buf(),
            })
        })
    }

    fn open_resource<'a>(
        &'a self,
        path: &'a Path,
    ) -> EditorHostFuture<'a, Result<(), HostBridgeError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            if let Some(reason) = &state.open_resource_failure {
                return Err(HostBridgeError::rejected("openResource", reason.clone()));
            }
            state.opened_resources.push(path.to_path_buf());
            Ok(())
        })
    }
}
