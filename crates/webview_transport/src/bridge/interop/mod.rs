//! Target routing for bridge probes.
//!
//! `wasm32` builds talk to `window` globals; every other target gets inert fallbacks with the
//! same signatures.

use crate::{NativeWebviewApi, StandaloneSender, TransportError};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn acquire_native_api() -> Option<Box<dyn NativeWebviewApi>> {
    imp::acquire_native_api()
}

pub fn is_standalone() -> bool {
    imp::is_standalone()
}

pub fn standalone_sender() -> Option<StandaloneSender> {
    imp::standalone_sender()
}

pub fn local_storage_get(key: &str) -> Result<Option<String>, TransportError> {
    imp::local_storage_get(key)
}

pub fn local_storage_set(key: &str, raw: &str) -> Result<(), TransportError> {
    imp::local_storage_set(key, raw)
}
