//! Display size calculation for thumbnails
//!
//! Photos are laid out from a capped display size rather than their natural
//! size so a handful of huge originals cannot dominate a row.

use serde::{Deserialize, Serialize};

/// Default cap on the longer display edge
pub const MAX_DISPLAY_EDGE: f64 = 650.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DisplaySize {
    pub width: f64,
    pub height: f64,
}

impl DisplaySize {
    pub fn aspect(&self) -> f64 {
        if self.height <= 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }
}

/// Display size with the longer edge capped at [`MAX_DISPLAY_EDGE`]
pub fn display_size(w: f64, h: f64) -> DisplaySize {
    display_size_capped(w, h, MAX_DISPLAY_EDGE)
}

/// Display size with the longer edge capped at `max_edge`, aspect preserved.
///
/// Square images clamp each axis on its own; with equal sides the result is
/// the same square.
pub fn display_size_capped(w: f64, h: f64, max_edge: f64) -> DisplaySize {
    let aspect = w / h;

    if w > h {
        let width = w.min(max_edge);
        DisplaySize { width, height: width / aspect }
    } else if h > w {
        let height = h.min(max_edge);
        DisplaySize { width: height * aspect, height }
    } else {
        DisplaySize {
            width: w.min(max_edge),
            height: h.min(max_edge),
        }
    }
}
