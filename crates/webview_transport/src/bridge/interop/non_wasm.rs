use super::*;

fn unsupported() -> TransportError {
    TransportError::Storage("localStorage is only available when compiled for wasm32".to_string())
}

pub fn acquire_native_api() -> Option<Box<dyn NativeWebviewApi>> {
    None
}

pub fn is_standalone() -> bool {
    false
}

pub fn standalone_sender() -> Option<StandaloneSender> {
    None
}

pub fn local_storage_get(_key: &str) -> Result<Option<String>, TransportError> {
    Ok(None)
}

pub fn local_storage_set(_key: &str, _raw: &str) -> Result<(), TransportError> {
    Err(unsupported())
}
