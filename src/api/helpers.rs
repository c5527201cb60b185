//! Shared helpers for WASM API operations
//!
//! Console output with a `[gallery]` prefix, page-global lookups, and
//! serde-wasm-bindgen conversions with logged errors.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::GalleryError;

// ============================================================================
// Console output
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = info)]
    fn console_info(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

/// Console channel for the `wasm_*!` macros
#[derive(Clone, Copy, Debug)]
pub enum Console {
    Info,
    Warn,
    Error,
}

/// Write one `[gallery]`-prefixed line to the browser console
pub fn console_line(channel: Console, msg: &str) {
    match channel {
        Console::Info => console_info(&format!("[gallery] {}", msg)),
        Console::Warn => console_warn(&format!("[gallery] {}", msg)),
        Console::Error => console_error(&format!("[gallery] {}", msg)),
    }
}

/// Entry-point progress, shown even when the `log` backend is off
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::console_line($crate::api::helpers::Console::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::console_line($crate::api::helpers::Console::Warn, &format!($($arg)*))
    };
}

/// Failures reported back to the page
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::console_line($crate::api::helpers::Console::Error, &format!($($arg)*))
    };
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        crate::wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Like [`deserialize`], but `undefined`/`null` yield the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        deserialize(value, error_context)
    }
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        crate::wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Read a global variable set by the server-rendered page
pub fn page_global(name: &str) -> Result<JsValue, JsValue> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log a gallery error and convert it for JavaScript
pub fn to_js_error(err: GalleryError) -> JsValue {
    crate::wasm_error!("{}", err);
    err.into()
}
