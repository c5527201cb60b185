//! Grid Layout Engine
//!
//! This module computes the justified grid layout, generating a
//! [`GridLayout`] with every tile's position and size so the DOM layer only
//! has to stamp out elements.

pub mod geometry;
pub mod rows;
pub mod display_list;

pub use geometry::{display_size, DisplaySize};
pub use rows::compute_layout;
pub use display_list::{GridLayout, TileBox};

use crate::config::GridConfig;
use crate::models::Tile;

/// Lay out tiles by their capped display sizes
pub fn layout_tiles(tiles: &[Tile], container_width: f64, config: &GridConfig) -> GridLayout {
    let sizes: Vec<DisplaySize> = tiles
        .iter()
        .map(|tile| {
            let (w, h) = tile.natural_size();
            geometry::display_size_capped(w.max(1) as f64, h.max(1) as f64, config.max_edge)
        })
        .collect();
    compute_layout(&sizes, container_width, config)
}
