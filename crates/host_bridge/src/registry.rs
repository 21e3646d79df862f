//! One-shot capability registry injected into core entry points.
//!
//! The host integration constructs a [`HostProviderRegistry`] at startup, calls
//! [`HostProviderRegistry::initialize`] once, and passes the registry by reference to core logic.
//! Reads before initialization fail loudly with [`HostProviderError::Uninitialized`].

use std::{cell::RefCell, rc::Rc};

use tracing::{debug, warn};

use crate::{
    ExtensionContext, HostBridgeClientProvider, HostProviderError, OutputChannel, WebviewProvider,
    WebviewProviderType,
};

/// Host-supplied constructor for webview providers.
pub type WebviewProviderFactory = Rc<
    dyn Fn(&ExtensionContext, Rc<dyn OutputChannel>, WebviewProviderType) -> Rc<dyn WebviewProvider>,
>;

#[derive(Clone)]
struct CapabilityRegistration {
    webview_factory: WebviewProviderFactory,
    host_bridge: Rc<dyn HostBridgeClientProvider>,
}

#[derive(Default)]
/// Write-once, read-many slot holding the host's webview factory and bridge client provider.
pub struct HostProviderRegistry {
    registration: RefCell<Option<CapabilityRegistration>>,
}

impl HostProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records both host capabilities and marks the registry ready.
    ///
    /// Calling this again replaces the previous registration. Re-initialization is treated as a
    /// deliberate reset and is logged.
    pub fn initialize(
        &self,
        webview_factory: WebviewProviderFactory,
        host_bridge: Rc<dyn HostBridgeClientProvider>,
    ) {
        let previous = self.registration.replace(Some(CapabilityRegistration {
            webview_factory,
            host_bridge,
        }));
        if previous.is_some() {
            warn!("host providers re-initialized; previous registration replaced");
        } else {
            debug!("host providers initialized");
        }
    }

    /// Returns whether [`Self::initialize`] has run since construction or the last reset.
    pub fn is_ready(&self) -> bool {
        self.registration.borrow().is_some()
    }

    /// Builds a webview provider by delegating to the registered factory with the arguments
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`HostProviderError::Uninitialized`] when no factory is registered.
    pub fn create_webview_provider(
        &self,
        context: &ExtensionContext,
        output_channel: Rc<dyn OutputChannel>,
        provider_type: WebviewProviderType,
    ) -> Result<Rc<dyn WebviewProvider>, HostProviderError> {
        // Release the borrow before calling out; a factory may consult the registry itself.
        let factory = self
            .registration
            .borrow()
            .as_ref()
            .map(|registration| Rc::clone(&registration.webview_factory))
            .ok_or(HostProviderError::Uninitialized)?;
        debug!(
            provider_type = provider_type.as_str(),
            "creating webview provider"
        );
        Ok(factory(context, output_channel, provider_type))
    }

    /// Returns the registered host bridge client provider.
    ///
    /// # Errors
    ///
    /// Returns [`HostProviderError::Uninitialized`] when no provider is registered.
    pub fn host_bridge_provider(
        &self,
    ) -> Result<Rc<dyn HostBridgeClientProvider>, HostProviderError> {
        self.registration
            .borrow()
            .as_ref()
            .map(|registration| Rc::clone(&registration.host_bridge))
            .ok_or(HostProviderError::Uninitialized)
    }

    /// Clears the registration. Used by the host's teardown hook.
    pub fn reset(&self) {
        if self.registration.take().is_some() {
            debug!("host providers reset");
        }
    }
}
