//! Thin DOM helpers over `web-sys`
//!
//! Lookups return [`GalleryError`] instead of `Option`/`JsValue` so callers
//! can use `?` throughout.

pub mod grid;
pub mod editor_bindings;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

use crate::error::GalleryError;

pub fn window() -> Result<Window, GalleryError> {
    web_sys::window().ok_or_else(|| GalleryError::Js("no global window".to_string()))
}

pub fn document() -> Result<Document, GalleryError> {
    window()?
        .document()
        .ok_or_else(|| GalleryError::Js("window has no document".to_string()))
}

/// First element matching `selector`, or `MissingElement`
pub fn query(selector: &str) -> Result<Element, GalleryError> {
    query_opt(selector)?.ok_or_else(|| GalleryError::MissingElement(selector.to_string()))
}

pub fn query_opt(selector: &str) -> Result<Option<Element>, GalleryError> {
    document()?
        .query_selector(selector)
        .map_err(|e| GalleryError::js(&e))
}

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Result<Vec<Element>, GalleryError> {
    let list = document()?
        .query_selector_all(selector)
        .map_err(|e| GalleryError::js(&e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// `[attr="value"]` with quotes and backslashes escaped
pub fn attr_selector(attr: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[{}=\"{}\"]", attr, escaped)
}

/// Nearest ancestor-or-self carrying `attr`, and its value
pub fn closest_attr(target: &Element, attr: &str) -> Option<(Element, String)> {
    let element = target.closest(&format!("[{}]", attr)).ok().flatten()?;
    let value = element.get_attribute(attr)?;
    Some((element, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_selector_escapes() {
        assert_eq!(attr_selector("data-pid", "p1"), "[data-pid=\"p1\"]");
        assert_eq!(attr_selector("data-pid", "a\"b"), "[data-pid=\"a\\\"b\"]");
    }
}
