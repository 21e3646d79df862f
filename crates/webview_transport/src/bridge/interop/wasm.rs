use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::{from_value, Serializer};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};

use super::*;

const ACQUIRE_FN: &str = "acquireVsCodeApi";
const STANDALONE_FLAG: &str = "__is_standalone__";
const STANDALONE_SEND_FN: &str = "standalonePostMessage";

fn js_error(context: &str, err: JsValue) -> TransportError {
    TransportError::Host(format!("{context}: {err:?}"))
}

fn global_property(name: &str) -> Option<JsValue> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn global_function(name: &str) -> Option<Function> {
    global_property(name)?.dyn_into::<Function>().ok()
}

fn to_js(value: &Value) -> Result<JsValue, TransportError> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| TransportError::Serialize(err.to_string()))
}

fn from_js(value: JsValue) -> Option<Value> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    from_value(value).ok()
}

/// Native handle returned by the host's acquisition function.
struct JsNativeApi {
    handle: JsValue,
}

impl JsNativeApi {
    fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue, TransportError> {
        let function = Reflect::get(&self.handle, &JsValue::from_str(method))
            .map_err(|err| js_error(method, err))?
            .dyn_into::<Function>()
            .map_err(|_| TransportError::Host(format!("{method} is not a function")))?;
        let js_args = args.iter().collect::<Array>();
        function
            .apply(&self.handle, &js_args)
            .map_err(|err| js_error(method, err))
    }
}

impl NativeWebviewApi for JsNativeApi {
    fn post_message(&self, message: &Value) -> Result<(), TransportError> {
        self.call("postMessage", &[to_js(message)?]).map(|_| ())
    }

    fn get_state(&self) -> Option<Value> {
        match self.call("getState", &[]) {
            Ok(state) => from_js(state),
            Err(err) => {
                warn!(error = %err, "native getState failed");
                None
            }
        }
    }

    fn set_state(&self, state: Value) -> Result<Value, TransportError> {
        let stored = self.call("setState", &[to_js(&state)?])?;
        Ok(from_js(stored).unwrap_or(state))
    }
}

pub fn acquire_native_api() -> Option<Box<dyn NativeWebviewApi>> {
    let acquire = global_function(ACQUIRE_FN)?;
    match acquire.call0(&JsValue::NULL) {
        Ok(handle) => Some(Box::new(JsNativeApi { handle })),
        Err(err) => {
            warn!(error = ?err, "native webview api acquisition failed");
            None
        }
    }
}

pub fn is_standalone() -> bool {
    global_property(STANDALONE_FLAG).is_some_and(|flag| flag.is_truthy())
}

pub fn standalone_sender() -> Option<StandaloneSender> {
    let send = global_function(STANDALONE_SEND_FN)?;
    Some(Rc::new(move |json: &str| {
        send.call1(&JsValue::NULL, &JsValue::from_str(json))
            .map(|_| ())
            .map_err(|err| js_error(STANDALONE_SEND_FN, err))
    }))
}

fn local_storage() -> Result<web_sys::Storage, TransportError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| TransportError::Storage("localStorage unavailable".to_string()))
}

pub fn local_storage_get(key: &str) -> Result<Option<String>, TransportError> {
    local_storage()?
        .get_item(key)
        .map_err(|err| TransportError::Storage(format!("localStorage get_item failed: {err:?}")))
}

pub fn local_storage_set(key: &str, raw: &str) -> Result<(), TransportError> {
    local_storage()?
        .set_item(key, raw)
        .map_err(|err| TransportError::Storage(format!("localStorage set_item failed: {err:?}")))
}
