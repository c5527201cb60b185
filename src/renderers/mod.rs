//! Renderers module for the gallery grid
//!
//! Turns laid-out tiles into HTML through mustache templates.

pub mod tiles;

pub use tiles::{render_grid_html, render_tile};
