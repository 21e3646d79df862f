//! Native webview bridge handle contract and in-memory double.

use std::{cell::RefCell, rc::Rc};

use serde_json::Value;

use crate::TransportError;

/// Host-supplied native bridge handle. Acquired at most once per UI surface.
pub trait NativeWebviewApi {
    /// Sends a message to the extension side.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the message.
    fn post_message(&self, message: &Value) -> Result<(), TransportError>;

    /// Returns the host-persisted state, or `None` if nothing was stored.
    fn get_state(&self) -> Option<Value>;

    /// Replaces the host-persisted state and returns the value the host stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the state.
    fn set_state(&self, state: Value) -> Result<Value, TransportError>;
}

#[derive(Debug, Default)]
struct MemoryNativeState {
    posted: Vec<Value>,
    state: Option<Value>,
}

#[derive(Debug, Clone, Default)]
/// In-memory native handle. Clones share posted messages and state.
pub struct MemoryNativeApi {
    inner: Rc<RefCell<MemoryNativeState>>,
}

impl MemoryNativeApi {
    /// Messages posted through the handle, in order.
    pub fn posted_messages(&self) -> Vec<Value> {
        self.inner.borrow().posted.clone()
    }
}

impl NativeWebviewApi for MemoryNativeApi {
    fn post_message(&self, message: &Value) -> Result<(), TransportError> {
        self.inner.borrow_mut().posted.push(message.clone());
        Ok(())
    }

    fn get_state(&self) -> Option<Value> {
        self.inner.borrow().state.clone()
    }

    fn set_state(&self, state: Value) -> Result<Value, TransportError> {
        self.inner.borrow_mut().state = Some(state.clone());
        Ok(state)
    }
}
