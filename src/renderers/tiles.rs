//! Tile templates
//!
//! Each tile renders to a single absolutely positioned element so the grid
//! container ends up with exactly one child per tile, in render order.
//!
//! Templates:
//! - `photo_tile.html.mustache`: thumbnail `<img class="image-thumb">` with `data-pid`
//! - `menu_tile.html.mustache`: menu affordance; `data-target` names a modal when set

use mustache::Template;
use once_cell::unsync::Lazy;
use serde::Serialize;

use crate::error::GalleryError;
use crate::html_layout::{GridLayout, TileBox};
use crate::models::{MenuTile, Photo, Tile};

struct TileTemplates {
    photo: Template,
    menu: Template,
}

thread_local! {
    static TEMPLATES: Lazy<Result<TileTemplates, String>> = Lazy::new(|| {
        let photo = mustache::compile_str(include_str!("templates/photo_tile.html.mustache").trim())
            .map_err(|e| e.to_string())?;
        let menu = mustache::compile_str(include_str!("templates/menu_tile.html.mustache").trim())
            .map_err(|e| e.to_string())?;
        Ok(TileTemplates { photo, menu })
    });
}

#[derive(Serialize)]
struct PhotoContext<'a> {
    index: usize,
    left: String,
    top: String,
    width: String,
    height: String,
    pid: &'a str,
    src: &'a str,
    alt: &'a str,
}

#[derive(Serialize)]
struct MenuContext<'a> {
    index: usize,
    left: String,
    top: String,
    width: String,
    height: String,
    upload_button: bool,
    has_target: bool,
    target: &'a str,
    text: &'a str,
}

fn px(value: f64) -> String {
    format!("{:.2}", value)
}

/// Render one tile at its computed position
pub fn render_tile(tile: &Tile, bounds: &TileBox) -> Result<String, GalleryError> {
    TEMPLATES.with(|templates| {
        let templates = templates
            .as_ref()
            .map_err(|e| GalleryError::Template(e.clone()))?;
        let html = match tile {
            Tile::Photo(photo) => templates.photo.render_to_string(&photo_context(photo, bounds))?,
            Tile::Menu(menu) => templates.menu.render_to_string(&menu_context(menu, bounds))?,
        };
        Ok(html)
    })
}

fn photo_context<'a>(photo: &'a Photo, bounds: &TileBox) -> PhotoContext<'a> {
    let alt = photo
        .title
        .as_deref()
        .or(photo.description.as_deref())
        .unwrap_or("");
    PhotoContext {
        index: bounds.index,
        left: px(bounds.left),
        top: px(bounds.top),
        width: px(bounds.width),
        height: px(bounds.height),
        pid: &photo.pid,
        src: &photo.msrc,
        alt,
    }
}

fn menu_context<'a>(menu: &'a MenuTile, bounds: &TileBox) -> MenuContext<'a> {
    MenuContext {
        index: bounds.index,
        left: px(bounds.left),
        top: px(bounds.top),
        width: px(bounds.width),
        height: px(bounds.height),
        upload_button: menu.upload_button,
        has_target: !menu.menu_target.is_empty(),
        target: &menu.menu_target,
        text: &menu.menu_text,
    }
}

/// Render the whole grid; tiles and layout boxes are matched by index
pub fn render_grid_html(tiles: &[Tile], layout: &GridLayout) -> Result<String, GalleryError> {
    let mut html = String::new();
    for bounds in &layout.boxes {
        let tile = tiles
            .get(bounds.index)
            .ok_or(GalleryError::IndexOutOfRange { index: bounds.index, len: tiles.len() })?;
        html.push_str(&render_tile(tile, bounds)?);
    }
    Ok(html)
}
