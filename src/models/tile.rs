//! Grid tiles
//!
//! The grid lays out photos and synthetic menu entries in one pass. Menu
//! entries only carry layout hints, so the two kinds are kept apart as a
//! tagged enum and dispatched explicitly when rendering.

use serde::{Deserialize, Serialize};

use super::photo::Photo;

/// A non-photo grid entry such as the upload affordance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuTile {
    /// Render as the upload button
    #[serde(default)]
    pub upload_button: bool,

    /// Element id of the modal opened by this tile
    #[serde(default)]
    pub menu_target: String,

    #[serde(default)]
    pub menu_text: String,

    #[serde(default = "default_menu_edge")]
    pub w: u32,

    #[serde(default = "default_menu_edge")]
    pub h: u32,
}

fn default_menu_edge() -> u32 {
    1
}

/// Anything the grid can lay out
#[derive(Clone, Debug, PartialEq)]
pub enum Tile {
    Photo(Photo),
    Menu(MenuTile),
}

impl Tile {
    /// Natural size used for layout
    pub fn natural_size(&self) -> (u32, u32) {
        match self {
            Tile::Photo(photo) => (photo.w, photo.h),
            Tile::Menu(menu) => (menu.w, menu.h),
        }
    }

    pub fn as_photo(&self) -> Option<&Photo> {
        match self {
            Tile::Photo(photo) => Some(photo),
            Tile::Menu(_) => None,
        }
    }
}
