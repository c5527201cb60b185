//! Photo Album Gallery WASM Module
//!
//! Browser-side scripting for the picfolio album pages: a justified photo
//! grid, a PhotoSwipe lightbox with deep links, and inline editing of albums
//! and photos on the edit page.

pub mod api;
pub mod config;
pub mod dom;
pub mod editor;
pub mod error;
pub mod html_layout;
pub mod http;
pub mod lightbox;
pub mod models;
pub mod parse;
pub mod renderers;

// Re-export commonly used types
pub use config::{EditorConfig, GalleryConfig, GridConfig, LightboxConfig};
pub use error::GalleryError;
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Photo gallery WASM module initialized");
}
