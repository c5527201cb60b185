//! Models module for the photo album gallery
//!
//! Plain records supplied by the server-rendered page (photos, albums,
//! menu tiles) and the view models built from them.

pub mod photo;
pub mod tile;
pub mod gallery;

// Re-export commonly used types
pub use photo::{Album, Photo};
pub use tile::{MenuTile, Tile};
pub use gallery::Gallery;
