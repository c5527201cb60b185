//! Grid rendering into the page
//!
//! Every call measures the container, recomputes the layout and replaces all
//! of the container's children, so it can be repeated on resize.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::config::GridConfig;
use crate::error::GalleryError;
use crate::html_layout::{layout_tiles, GridLayout};
use crate::models::Gallery;
use crate::renderers::render_grid_html;

/// Render the gallery into `container`
pub fn render_grid(container: &Element, gallery: &Gallery, config: &GridConfig) -> Result<GridLayout, GalleryError> {
    let tiles = gallery.tiles();
    let width = container.client_width() as f64;
    let layout = layout_tiles(&tiles, width, config);
    let html = render_grid_html(&tiles, &layout)?;

    container.set_inner_html(&html);

    if let Some(element) = container.dyn_ref::<HtmlElement>() {
        let style = element.style();
        style
            .set_property("position", "relative")
            .map_err(|e| GalleryError::js(&e))?;
        style
            .set_property("height", &format!("{:.2}px", layout.height))
            .map_err(|e| GalleryError::js(&e))?;
    }

    log::debug!(
        "grid rendered: {} tiles in {} rows at width {}",
        layout.boxes.len(),
        layout.row_count(),
        width
    );
    Ok(layout)
}

/// Show the modal a menu tile points at
pub fn open_menu_modal(target_id: &str, active_class: &str) -> Result<(), GalleryError> {
    let modal = super::document()?
        .get_element_by_id(target_id)
        .ok_or_else(|| GalleryError::MissingElement(format!("#{}", target_id)))?;
    modal
        .class_list()
        .add_1(active_class)
        .map_err(|e| GalleryError::js(&e))
}
