//! Mode-resolved message transport for one UI surface.

use std::{path::Path, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    platform_state_storage, platform_state_storage_in, BrowserEnvironment, HostEnvironment,
    NativeWebviewApi, StateStorage, TransportConfig, TransportError,
};

/// Substrate a [`WebviewTransport`] selected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    /// A host-supplied native bridge handle is in use.
    Native,
    /// Standalone browser deployment with a globally registered send function.
    Standalone,
    /// No delivery channel; messages are logged and dropped.
    Degraded,
}

impl TransportMode {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Standalone => "standalone",
            Self::Degraded => "degraded",
        }
    }
}

/// Operations shared by every transport backend. None of them fail from the caller's view.
pub trait MessageTransport {
    /// Delivers a message to the extension side, or logs and drops it.
    fn post_message(&self, message: &Value);

    /// Returns the persisted UI state, or `None` when nothing has been stored.
    fn get_state(&self) -> Option<Value>;

    /// Replaces the persisted UI state and returns the value written.
    fn set_state(&self, state: Value) -> Value;
}

/// UI state persisted as JSON text under a fixed key.
struct StoredState {
    storage: Rc<dyn StateStorage>,
    key: String,
}

impl StoredState {
    fn get(&self) -> Option<Value> {
        let raw = match self.storage.load_raw(&self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, key = %self.key, "state storage read failed");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(error = %err, key = %self.key, "discarding unparseable persisted state");
                None
            }
        }
    }

    fn set(&self, state: Value) -> Value {
        match serde_json::to_string(&state) {
            Ok(raw) => {
                if let Err(err) = self.storage.save_raw(&self.key, &raw) {
                    warn!(error = %err, key = %self.key, "state storage write failed");
                }
            }
            Err(err) => warn!(error = %err, "state serialization failed"),
        }
        state
    }
}

/// Native-mode backend forwarding everything to the acquired handle.
pub struct NativeBackend {
    handle: Box<dyn NativeWebviewApi>,
}

impl MessageTransport for NativeBackend {
    fn post_message(&self, message: &Value) {
        if let Err(err) = self.handle.post_message(message) {
            warn!(error = %err, "native postMessage failed; message dropped");
        }
    }

    fn get_state(&self) -> Option<Value> {
        self.handle.get_state()
    }

    fn set_state(&self, state: Value) -> Value {
        match self.handle.set_state(state.clone()) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "native setState failed");
                state
            }
        }
    }
}

/// Standalone-mode backend: JSON text to the registered global send function.
pub struct StandaloneBackend {
    environment: Rc<dyn HostEnvironment>,
    state: StoredState,
    log_preview_chars: usize,
}

impl MessageTransport for StandaloneBackend {
    fn post_message(&self, message: &Value) {
        let Some(send) = self.environment.standalone_sender() else {
            warn!("Standalone postMessage not found.");
            return;
        };
        let json = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "standalone message serialization failed; message dropped");
                return;
            }
        };
        let preview: String = json.chars().take(self.log_preview_chars).collect();
        debug!(preview = %preview, "Standalone postMessage");
        if let Err(err) = send(&json) {
            warn!(error = %err, "standalone postMessage failed; message dropped");
        }
    }

    fn get_state(&self) -> Option<Value> {
        self.state.get()
    }

    fn set_state(&self, state: Value) -> Value {
        self.state.set(state)
    }
}

/// Degraded-mode backend: logs messages, keeps state in local storage.
pub struct DegradedBackend {
    state: StoredState,
}

impl MessageTransport for DegradedBackend {
    fn post_message(&self, message: &Value) {
        info!(message = %message, "postMessage fallback");
    }

    fn get_state(&self) -> Option<Value> {
        self.state.get()
    }

    fn set_state(&self, state: Value) -> Value {
        self.state.set(state)
    }
}

/// Backend enum resolved once at construction and dispatched by `match` afterwards.
pub enum TransportBackend {
    /// Native bridge handle.
    Native(NativeBackend),
    /// Standalone global send function.
    Standalone(StandaloneBackend),
    /// No delivery channel.
    Degraded(DegradedBackend),
}

impl TransportBackend {
    /// Mode this backend implements.
    pub const fn mode(&self) -> TransportMode {
        match self {
            Self::Native(_) => TransportMode::Native,
            Self::Standalone(_) => TransportMode::Standalone,
            Self::Degraded(_) => TransportMode::Degraded,
        }
    }
}

impl MessageTransport for TransportBackend {
    fn post_message(&self, message: &Value) {
        match self {
            Self::Native(backend) => backend.post_message(message),
            Self::Standalone(backend) => backend.post_message(message),
            Self::Degraded(backend) => backend.post_message(message),
        }
    }

    fn get_state(&self) -> Option<Value> {
        match self {
            Self::Native(backend) => backend.get_state(),
            Self::Standalone(backend) => backend.get_state(),
            Self::Degraded(backend) => backend.get_state(),
        }
    }

    fn set_state(&self, state: Value) -> Value {
        match self {
            Self::Native(backend) => backend.set_state(state),
            Self::Standalone(backend) => backend.set_state(state),
            Self::Degraded(backend) => backend.set_state(state),
        }
    }
}

/// Message transport for one UI surface. The mode never changes after construction.
pub struct WebviewTransport {
    backend: TransportBackend,
}

impl WebviewTransport {
    /// Probes `environment` once and builds the matching backend.
    ///
    /// The native acquisition function runs at most once here and never again for this
    /// instance. `storage` backs UI state in standalone and degraded modes.
    pub fn new(
        environment: Rc<dyn HostEnvironment>,
        storage: Rc<dyn StateStorage>,
        config: TransportConfig,
    ) -> Self {
        let stored_state = || StoredState {
            storage: Rc::clone(&storage),
            key: config.state_key.clone(),
        };
        let backend = if let Some(handle) = environment.acquire_native_api() {
            TransportBackend::Native(NativeBackend { handle })
        } else if environment.is_standalone() {
            TransportBackend::Standalone(StandaloneBackend {
                state: stored_state(),
                environment,
                log_preview_chars: config.log_preview_chars,
            })
        } else {
            TransportBackend::Degraded(DegradedBackend {
                state: stored_state(),
            })
        };
        debug!(mode = backend.mode().as_str(), "webview transport ready");
        Self { backend }
    }

    /// Builds a transport against the real execution context with default config.
    pub fn from_platform() -> Self {
        Self::new(
            Rc::new(BrowserEnvironment),
            platform_state_storage(),
            TransportConfig::default(),
        )
    }

    /// Builds a platform transport whose fallback state survives process restarts.
    ///
    /// On `wasm32` state goes to `localStorage` and `root` is unused. Elsewhere it is written to
    /// a JSON file under `root`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Storage`] when the state directory cannot be created.
    pub fn from_platform_with_root(root: impl AsRef<Path>) -> Result<Self, TransportError> {
        Ok(Self::new(
            Rc::new(BrowserEnvironment),
            platform_state_storage_in(root)?,
            TransportConfig::default(),
        ))
    }

    /// Mode selected at construction.
    pub fn mode(&self) -> TransportMode {
        self.backend.mode()
    }

    /// Sends any JSON-serializable message. Never fails; undeliverable messages are logged.
    pub fn post_message<T: Serialize + ?Sized>(&self, message: &T) {
        match serde_json::to_value(message) {
            Ok(value) => self.backend.post_message(&value),
            Err(err) => warn!(error = %err, "message is not JSON-serializable; dropped"),
        }
    }

    /// Returns the persisted UI state, or `None` when nothing has been stored.
    pub fn get_state(&self) -> Option<Value> {
        self.backend.get_state()
    }

    /// Overwrites the persisted UI state and returns the value written.
    pub fn set_state(&self, new_state: Value) -> Value {
        self.backend.set_state(new_state)
    }

    /// Reads the persisted UI state as `T`, or `None` when absent or of another shape.
    pub fn get_state_typed<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.get_state()?).ok()
    }

    /// Serializes `new_state` and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Serialize`] when `new_state` cannot be represented as JSON.
    pub fn set_state_typed<T: Serialize>(&self, new_state: &T) -> Result<Value, TransportError> {
        let value = serde_json::to_value(new_state)
            .map_err(|err| TransportError::Serialize(err.to_string()))?;
        Ok(self.set_state(value))
    }
}

thread_local! {
    static WEBVIEW_TRANSPORT: Rc<WebviewTransport> = Rc::new(WebviewTransport::from_platform());
}

/// Returns the transport shared by the current UI surface context.
///
/// The first call probes the platform; later calls return the same instance, so the native
/// handle is never acquired twice.
pub fn webview_transport() -> Rc<WebviewTransport> {
    WEBVIEW_TRANSPORT.with(Rc::clone)
}
