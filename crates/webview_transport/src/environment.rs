//! Environment probes used once at transport construction.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{bridge, NativeWebviewApi, TransportError};

/// Send function registered by a standalone deployment; receives the JSON-serialized message.
pub type StandaloneSender = Rc<dyn Fn(&str) -> Result<(), TransportError>>;

/// Capabilities of the execution context hosting the UI surface.
pub trait HostEnvironment {
    /// Acquires the native bridge handle if the host offers one.
    ///
    /// Hosts typically allow a single acquisition; callers must invoke this at most once.
    fn acquire_native_api(&self) -> Option<Box<dyn NativeWebviewApi>>;

    /// Returns whether the context is flagged as a standalone (non-native) deployment.
    fn is_standalone(&self) -> bool;

    /// Looks up the globally registered standalone send function.
    fn standalone_sender(&self) -> Option<StandaloneSender>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Environment probe for the real execution context (`window` globals on `wasm32`).
///
/// On other targets nothing is available, which selects degraded mode.
pub struct BrowserEnvironment;

impl HostEnvironment for BrowserEnvironment {
    fn acquire_native_api(&self) -> Option<Box<dyn NativeWebviewApi>> {
        bridge::acquire_native_api()
    }

    fn is_standalone(&self) -> bool {
        bridge::is_standalone()
    }

    fn standalone_sender(&self) -> Option<StandaloneSender> {
        bridge::standalone_sender()
    }
}

#[derive(Default)]
/// Scripted environment for tests and headless embedding.
pub struct MemoryEnvironment {
    native: RefCell<Option<Box<dyn NativeWebviewApi>>>,
    acquisitions: Cell<usize>,
    standalone: bool,
    sender_registered: Cell<bool>,
    sent: Rc<RefCell<Vec<String>>>,
}

impl MemoryEnvironment {
    /// Environment offering `api` as its native handle. A second acquisition yields nothing.
    pub fn native(api: impl NativeWebviewApi + 'static) -> Self {
        Self {
            native: RefCell::new(Some(Box::new(api))),
            ..Self::default()
        }
    }

    /// Standalone environment without a registered send function.
    pub fn standalone() -> Self {
        Self {
            standalone: true,
            ..Self::default()
        }
    }

    /// Environment with no delivery channel at all.
    pub fn degraded() -> Self {
        Self::default()
    }

    /// Registers a send function that records every message it receives.
    pub fn register_recording_sender(&self) {
        self.sender_registered.set(true);
    }

    /// Number of native acquisition attempts observed.
    pub fn acquisition_count(&self) -> usize {
        self.acquisitions.get()
    }

    /// JSON strings received by the recording sender.
    pub fn sent_messages(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl HostEnvironment for MemoryEnvironment {
    fn acquire_native_api(&self) -> Option<Box<dyn NativeWebviewApi>> {
        self.acquisitions.set(self.acquisitions.get() + 1);
        self.native.borrow_mut().take()
    }

    fn is_standalone(&self) -> bool {
        self.standalone
    }

    fn standalone_sender(&self) -> Option<StandaloneSender> {
        if !self.sender_registered.get() {
            return None;
        }
        let sent = Rc::clone(&self.sent);
        Some(Rc::new(move |json: &str| {
            sent.borrow_mut().push(json.to_string());
            Ok(())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryNativeApi;

    #[test]
    fn memory_environment_hands_out_native_api_once() {
        let environment = MemoryEnvironment::native(MemoryNativeApi::default());
        assert!(environment.acquire_native_api().is_some());
        assert!(environment.acquire_native_api().is_none());
        assert_eq!(environment.acquisition_count(), 2);
    }

    #[test]
    fn recording_sender_is_visible_only_after_registration() {
        let environment = MemoryEnvironment::standalone();
        assert!(environment.is_standalone());
        assert!(environment.standalone_sender().is_none());

        environment.register_recording_sender();
        let sender = environment.standalone_sender().expect("sender");
        sender("{\"type\":\"ready\"}").expect("send");
        assert_eq!(environment.sent_messages(), vec!["{\"type\":\"ready\"}"]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_environment_offers_nothing_off_wasm() {
        let environment = BrowserEnvironment;
        assert!(environment.acquire_native_api().is_none());
        assert!(!environment.is_standalone());
        assert!(environment.standalone_sender().is_none());
    }
}
