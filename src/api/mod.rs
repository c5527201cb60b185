//! Photo Gallery WASM API
//!
//! This module provides the JavaScript-facing API for the album pages.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and JS (de)serialization helpers
//! - `gallery`: grid rendering, lightbox and deep links (public album pages)
//! - `editor`: inline editing on the album edit page

pub mod helpers;
pub mod gallery;
pub mod editor;

pub use gallery::{display_size_js, init_gallery, init_gallery_from_page, open_lightbox, parse_hash_js, relayout_gallery};
pub use editor::{init_album_editor, init_album_editor_from_page};
