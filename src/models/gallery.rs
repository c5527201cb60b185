//! Gallery view model
//!
//! Holds the photo list in lightbox order together with the optional menu
//! tiles. Menu tiles render first, photos follow in their given order, so
//! a photo's lightbox index is its position in `photos` and never counts
//! menu tiles.

use serde::{Deserialize, Serialize};

use super::photo::Photo;
use super::tile::{MenuTile, Tile};
use crate::error::GalleryError;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Gallery {
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub grid_menu: Vec<MenuTile>,
}

impl Gallery {
    pub fn new(photos: Vec<Photo>, grid_menu: Vec<MenuTile>) -> Self {
        Self { photos, grid_menu }
    }

    /// Build from page data given as JSON text
    pub fn from_json(photos: &str, grid_menu: Option<&str>) -> Result<Self, GalleryError> {
        let photos: Vec<Photo> = serde_json::from_str(photos)?;
        let grid_menu = match grid_menu {
            Some(json) => serde_json::from_str(json)?,
            None => Vec::new(),
        };
        Ok(Self::new(photos, grid_menu))
    }

    /// Flat render list: menu tiles then photos
    pub fn tiles(&self) -> Vec<Tile> {
        self.grid_menu
            .iter()
            .cloned()
            .map(Tile::Menu)
            .chain(self.photos.iter().cloned().map(Tile::Photo))
            .collect()
    }

    pub fn photo(&self, index: usize) -> Option<&Photo> {
        self.photos.get(index)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}
