pub mod audio;
pub mod camera;
pub mod capture;
pub mod date_utils;
pub mod document;
pub mod logging;
pub mod share;
pub mod speech;

use wasm_bindgen::{JsCast, JsValue};

/// Human readable text for a rejected promise or thrown JS value
pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}
