//! Display list for the grid
//!
//! Output of the layout engine: one box per tile, in input order, with
//! positions relative to the grid container's top-left corner.

use serde::{Deserialize, Serialize};

/// Position and size of a single tile
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TileBox {
    /// Index of the tile in the render list
    pub index: usize,

    /// Row the tile was placed in (0-based)
    pub row: usize,

    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Complete grid layout
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GridLayout {
    pub boxes: Vec<TileBox>,

    /// Container width the layout was computed for
    pub width: f64,

    /// Total height of all rows including gaps
    pub height: f64,
}

impl GridLayout {
    pub fn row_count(&self) -> usize {
        self.boxes.last().map(|b| b.row + 1).unwrap_or(0)
    }

    /// Boxes belonging to one row
    pub fn row(&self, row: usize) -> impl Iterator<Item = &TileBox> {
        self.boxes.iter().filter(move |b| b.row == row)
    }
}
