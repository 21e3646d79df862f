//! Host bridge client provider: the capability set core logic uses for user-visible host actions.

use std::rc::Rc;

use crate::{NoopWindowClient, WindowClient};

/// Capability set exposing the host's domain sub-clients.
///
/// Implementations are thin seams with no business logic. Error classification and retries
/// belong to callers.
pub trait HostBridgeClientProvider {
    /// Window-operations client (notifications, showing documents).
    fn window_client(&self) -> &dyn WindowClient;
}

#[derive(Clone)]
/// Concrete host bridge bundle assembled by a host integration at startup.
pub struct HostBridgeClients {
    window: Rc<dyn WindowClient>,
}

impl HostBridgeClients {
    /// Bundles the given sub-clients.
    pub fn new(window: Rc<dyn WindowClient>) -> Self {
        Self { window }
    }

    /// Bundle for hosts without any window operations.
    pub fn noop() -> Self {
        Self::new(Rc::new(NoopWindowClient))
    }
}

impl Default for HostBridgeClients {
    fn default() -> Self {
        Self::noop()
    }
}

impl HostBridgeClientProvider for HostBridgeClients {
    fn window_client(&self) -> &dyn WindowClient {
        self.window.as_ref()
    }
}
