//! Error types for gallery and editor operations
//!
//! Everything that can fail in the gallery funnels into [`GalleryError`].
//! At the `wasm_bindgen` boundary the error is logged and turned into a
//! `JsValue` string so JavaScript callers see a rejected promise or thrown
//! exception with a readable message.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error type for the gallery module
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GalleryError {
    /// No photo with this identifier exists in the gallery
    #[error("Unknown photo: {0}")]
    UnknownPhoto(String),

    /// A precomputed lightbox index does not address a photo
    #[error("Photo index {index} out of range (gallery has {len} photos)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A required DOM element could not be found
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Tile template failed to compile or render
    #[error("Template error: {0}")]
    Template(String),

    /// Server answered with a non-success status
    #[error("{method} {path} failed with status {status}")]
    Http {
        method: String,
        path: String,
        status: u16,
    },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// A JavaScript call threw or returned an unexpected value
    #[error("JavaScript error: {0}")]
    Js(String),

    /// Page-supplied data could not be deserialized
    #[error("Invalid page data: {0}")]
    PageData(String),

    /// The gallery has not been initialized yet
    #[error("Gallery not initialized")]
    NotInitialized,
}

impl GalleryError {
    /// Wrap a thrown JavaScript value
    pub fn js(value: &JsValue) -> Self {
        GalleryError::Js(describe_js(value))
    }
}

impl From<GalleryError> for JsValue {
    fn from(err: GalleryError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for GalleryError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        GalleryError::PageData(err.to_string())
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(err: serde_json::Error) -> Self {
        GalleryError::PageData(err.to_string())
    }
}

impl From<mustache::Error> for GalleryError {
    fn from(err: mustache::Error) -> Self {
        GalleryError::Template(err.to_string())
    }
}

/// Best-effort string form of a thrown JS value
pub fn describe_js(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
