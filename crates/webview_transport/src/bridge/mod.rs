//! Platform capability bridge for the webview transport.
//!
//! Probes for the native bridge handle, the standalone globals, and `localStorage`. The
//! target-specific glue lives in `interop`.

mod interop;

use crate::{NativeWebviewApi, StandaloneSender, TransportError};

pub(crate) fn acquire_native_api() -> Option<Box<dyn NativeWebviewApi>> {
    interop::acquire_native_api()
}

pub(crate) fn is_standalone() -> bool {
    interop::is_standalone()
}

pub(crate) fn standalone_sender() -> Option<StandaloneSender> {
    interop::standalone_sender()
}

pub(crate) fn local_storage_get(key: &str) -> Result<Option<String>, TransportError> {
    interop::local_storage_get(key)
}

pub(crate) fn local_storage_set(key: &str, raw: &str) -> Result<(), TransportError> {
    interop::local_storage_set(key, raw)
}
