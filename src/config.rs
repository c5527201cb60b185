//! Configuration for the grid, lightbox and inline editor
//!
//! Every struct deserializes from an optional JavaScript object. Missing
//! fields fall back to the defaults the album pages are built around, so
//! `initGallery(photos, menu)` with no config behaves like the stock pages.

use serde::{Deserialize, Serialize};

/// Justified grid configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Target row height in pixels
    pub row_height: f64,

    /// Rows are never scaled taller than this
    pub max_row_height: f64,

    /// Gap between tiles, both horizontally and between rows
    pub margin: f64,

    /// Longest display edge a tile may report to the layout
    pub max_edge: f64,

    /// CSS selector of the grid container
    pub container_selector: String,

    /// Re-render the grid when the window is resized
    pub relayout_on_resize: bool,

    /// Class added to a menu tile's target modal to show it
    pub modal_active_class: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            row_height: 250.0,
            max_row_height: 500.0,
            margin: 2.0,
            max_edge: 650.0,
            container_selector: ".image-container".to_string(),
            relayout_on_resize: true,
            modal_active_class: "is-active".to_string(),
        }
    }
}

/// PhotoSwipe integration settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LightboxConfig {
    /// Selector of the `.pswp` root element
    pub pswp_selector: String,

    /// Gallery uid written into the URL fragment as `gid`
    pub gallery_uid: i64,

    /// Open the lightbox from the URL fragment on load
    pub open_from_hash: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            pswp_selector: ".pswp".to_string(),
            gallery_uid: 1,
            open_from_hash: true,
        }
    }
}

/// Combined config accepted by `initGallery`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub grid: GridConfig,
    pub lightbox: LightboxConfig,
}

/// Element selectors used by the album edit page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    pub album_title_selector: String,
    pub album_description_selector: String,
    /// Photo description fields, each carrying `data-id`
    pub photo_description_selector: String,
    pub cover_button_selector: String,
    pub rotate_button_selector: String,
    pub delete_photo_selector: String,
    pub delete_album_selector: String,
    /// Thumbnails on the edit page, each carrying `data-id`
    pub thumbnail_selector: String,
    pub confirm_modal_selector: String,
    pub confirm_button_selector: String,
    pub cancel_button_selector: String,
    /// Class toggled on the confirm modal to show it
    pub modal_active_class: String,
    /// Where to go after the album is deleted
    pub admin_path: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            album_title_selector: "#album-title".to_string(),
            album_description_selector: "#album-description".to_string(),
            photo_description_selector: ".photo-description".to_string(),
            cover_button_selector: ".cover-button".to_string(),
            rotate_button_selector: ".rotate-button".to_string(),
            delete_photo_selector: ".delete-photo-button".to_string(),
            delete_album_selector: "#delete-album".to_string(),
            thumbnail_selector: ".edit-thumb".to_string(),
            confirm_modal_selector: "#confirm-modal".to_string(),
            confirm_button_selector: "#confirm-delete".to_string(),
            cancel_button_selector: ".confirm-cancel".to_string(),
            modal_active_class: "is-active".to_string(),
            admin_path: "/admin".to_string(),
        }
    }
}
