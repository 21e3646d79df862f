//! Webview provider contracts and the values passed through the provider factory.

use std::{cell::RefCell, path::PathBuf, rc::Rc};

use serde::{Deserialize, Serialize};

/// UI surface variant a webview provider renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebviewProviderType {
    /// Sidebar view hosted in the activity bar.
    Sidebar,
    /// Full editor tab.
    Tab,
}

impl WebviewProviderType {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::Tab => "tab",
        }
    }
}

/// Host-supplied extension context, passed to the webview factory unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionContext {
    /// Publisher-qualified extension identifier.
    pub extension_id: String,
    /// Install directory of the extension bundle.
    pub extension_path: PathBuf,
    /// Host-managed directory for durable extension data.
    pub global_storage_path: PathBuf,
}

/// Narrow view of a host output channel.
pub trait OutputChannel {
    /// Channel name shown by the host.
    fn name(&self) -> &str;

    /// Appends one line of text to the channel.
    fn append_line(&self, line: &str);
}

#[derive(Debug, Clone, Default)]
/// Output channel that discards everything written to it.
pub struct NoopOutputChannel {
    name: String,
}

impl NoopOutputChannel {
    /// Creates a named no-op channel.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl OutputChannel for NoopOutputChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn append_line(&self, _line: &str) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory output channel. Clones share the same line buffer.
pub struct MemoryOutputChannel {
    name: String,
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryOutputChannel {
    /// Creates a named in-memory channel.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Rc::default(),
        }
    }

    /// Returns every line appended so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl OutputChannel for MemoryOutputChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn append_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Host-specific UI surface object built by a [`crate::WebviewProviderFactory`].
pub trait WebviewProvider {
    /// Surface variant this provider renders.
    fn provider_type(&self) -> WebviewProviderType;

    /// Stable identifier of this provider instance.
    fn client_id(&self) -> &str;

    /// Releases host resources held by the provider.
    fn dispose(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_type_wire_names_are_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&WebviewProviderType::Sidebar).expect("serialize"),
            "\"SIDEBAR\""
        );
        let parsed: WebviewProviderType = serde_json::from_str("\"TAB\"").expect("parse");
        assert_eq!(parsed, WebviewProviderType::Tab);
        assert_eq!(parsed.as_str(), "tab");
    }

    #[test]
    fn memory_output_channel_clones_share_lines() {
        let channel = MemoryOutputChannel::new("Extension");
        let writer = channel.clone();
        writer.append_line("first");
        writer.append_line("second");

        assert_eq!(channel.name(), "Extension");
        assert_eq!(channel.lines(), vec!["first", "second"]);
    }
}
