//! WASM API for the public album page
//!
//! Renders the justified grid, wires thumbnail clicks to the lightbox and
//! reopens the lightbox from a deep link.

use std::cell::RefCell;
use std::sync::Mutex;

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::helpers::{deserialize, deserialize_or_default, page_global, serialize, to_js_error};
use crate::config::GalleryConfig;
use crate::dom::{self, grid};
use crate::error::GalleryError;
use crate::html_layout::display_size;
use crate::lightbox::{self, photoswipe, PhotoRef};
use crate::models::{Gallery, MenuTile, Photo};
use crate::parse::{parse_hash, photo_id_from_thumb_url};
use crate::{wasm_info, wasm_warn};

/// Gallery data and config for the current page
struct GalleryState {
    gallery: Gallery,
    config: GalleryConfig,
}

lazy_static! {
    static ref GALLERY: Mutex<Option<GalleryState>> = Mutex::new(None);
}

thread_local! {
    /// Click and resize listeners of the last `initGallery` call
    static LISTENERS: RefCell<Option<GridListeners>> = RefCell::new(None);
}

fn with_state<T>(f: impl FnOnce(&GalleryState) -> Result<T, GalleryError>) -> Result<T, GalleryError> {
    let guard = GALLERY
        .lock()
        .map_err(|_| GalleryError::Js("gallery state lock poisoned".to_string()))?;
    let state = guard.as_ref().ok_or(GalleryError::NotInitialized)?;
    f(state)
}

/// Render the grid and wire the lightbox
///
/// # Parameters
/// - `photos`: array of Photo objects, in lightbox order
/// - `grid_menu`: optional array of menu tiles rendered before the photos
/// - `config`: optional `GalleryConfig` object
#[wasm_bindgen(js_name = initGallery)]
pub fn init_gallery(photos: JsValue, grid_menu: JsValue, config: JsValue) -> Result<(), JsValue> {
    let photos: Vec<Photo> = deserialize(photos, "Photo deserialization error")?;
    let grid_menu: Vec<MenuTile> = deserialize_or_default(grid_menu, "Grid menu deserialization error")?;
    let config: GalleryConfig = deserialize_or_default(config, "Gallery config deserialization error")?;

    wasm_info!("initGallery called: {} photos, {} menu tiles", photos.len(), grid_menu.len());
    install(Gallery::new(photos, grid_menu), config).map_err(to_js_error)
}

/// Same as `initGallery`, reading the page globals `photos` and `gridMenu`
#[wasm_bindgen(js_name = initGalleryFromPage)]
pub fn init_gallery_from_page(config: JsValue) -> Result<(), JsValue> {
    init_gallery(page_global("photos")?, page_global("gridMenu")?, config)
}

fn install(gallery: Gallery, config: GalleryConfig) -> Result<(), GalleryError> {
    let container = dom::query(&config.grid.container_selector)?;
    grid::render_grid(&container, &gallery, &config.grid)?;

    let relayout_on_resize = config.grid.relayout_on_resize;
    let open_from_hash = config.lightbox.open_from_hash;
    {
        let mut guard = GALLERY
            .lock()
            .map_err(|_| GalleryError::Js("gallery state lock poisoned".to_string()))?;
        *guard = Some(GalleryState { gallery, config });
    }

    LISTENERS.with(|slot| -> Result<(), GalleryError> {
        let mut slot = slot.borrow_mut();
        if slot.as_ref().is_some_and(|bound| bound.serves(&container, relayout_on_resize)) {
            return Ok(());
        }
        if let Some(previous) = slot.take() {
            previous.detach()?;
        }
        *slot = Some(GridListeners::attach(container.clone(), relayout_on_resize)?);
        Ok(())
    })?;

    if open_from_hash {
        open_from_location_hash();
    }
    Ok(())
}

/// Re-render the grid at the container's current width
#[wasm_bindgen(js_name = relayoutGallery)]
pub fn relayout_gallery() -> Result<(), JsValue> {
    relayout().map_err(to_js_error)
}

fn relayout() -> Result<(), GalleryError> {
    with_state(|state| {
        let container = dom::query(&state.config.grid.container_selector)?;
        grid::render_grid(&container, &state.gallery, &state.config.grid).map(|_| ())
    })
}

/// Open the lightbox on a photo id (string) or lightbox index (number)
///
/// # Returns
/// The index the lightbox opened at
#[wasm_bindgen(js_name = openLightbox)]
pub fn open_lightbox(photo: JsValue, disable_animation: bool) -> Result<usize, JsValue> {
    let photo = photo_ref_from_js(&photo).map_err(to_js_error)?;
    open_photo(&photo, disable_animation).map_err(to_js_error)
}

fn photo_ref_from_js(value: &JsValue) -> Result<PhotoRef, GalleryError> {
    if let Some(id) = value.as_string() {
        return Ok(PhotoRef::Id(id));
    }
    match value.as_f64() {
        Some(n) if n >= 0.0 && n.fract() == 0.0 => Ok(PhotoRef::Index(n as usize)),
        _ => Err(GalleryError::Js(format!("expected photo id or index, got {:?}", value))),
    }
}

fn open_photo(photo: &PhotoRef, disable_animation: bool) -> Result<usize, GalleryError> {
    let (photos, lightbox, grid_selector) = with_state(|state| {
        Ok((
            state.gallery.photos.clone(),
            state.config.lightbox.clone(),
            state.config.grid.container_selector.clone(),
        ))
    })?;
    photoswipe::open(&photos, photo, disable_animation, &lightbox, &grid_selector)
}

/// Parse a URL fragment; reads `window.location.hash` when none is given
#[wasm_bindgen(js_name = parseHash)]
pub fn parse_hash_js(fragment: Option<String>) -> Result<JsValue, JsValue> {
    let fragment = match fragment {
        Some(fragment) => fragment,
        None => current_hash().map_err(to_js_error)?,
    };
    serialize(&parse_hash(&fragment), "Hash serialization error")
}

/// Capped display size for an image of natural size `w` x `h`
#[wasm_bindgen(js_name = displaySize)]
pub fn display_size_js(w: f64, h: f64) -> Result<JsValue, JsValue> {
    serialize(&display_size(w, h), "Size serialization error")
}

fn current_hash() -> Result<String, GalleryError> {
    dom::window()?.location().hash().map_err(|e| GalleryError::js(&e))
}

fn open_from_location_hash() {
    let params = match current_hash() {
        Ok(hash) => parse_hash(&hash),
        Err(err) => return wasm_warn!("Could not read location hash: {}", err),
    };
    let gallery_uid = match with_state(|state| Ok(state.config.lightbox.gallery_uid)) {
        Ok(uid) => uid,
        Err(_) => return,
    };
    if let Some(photo) = lightbox::deep_link_target(&params, gallery_uid) {
        wasm_info!("Opening deep link {:?}", photo);
        if let Err(err) = open_photo(&photo, true) {
            wasm_warn!("Deep link ignored: {}", err);
        }
    }
}

// ============================================================================
// Event listeners
// ============================================================================

type Listener = Closure<dyn FnMut(Event)>;

/// Listeners owned by the gallery; a new container or resize setting
/// replaces them
struct GridListeners {
    container: Element,
    click: Listener,
    resize: Option<Listener>,
}

impl GridListeners {
    fn attach(container: Element, relayout_on_resize: bool) -> Result<Self, GalleryError> {
        let click = Listener::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Err(err) = handle_grid_click(&target) {
                wasm_warn!("Grid click ignored: {}", err);
            }
        });
        container
            .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())
            .map_err(|e| GalleryError::js(&e))?;

        let resize = if relayout_on_resize {
            let on_resize = Listener::new(move |_event: Event| {
                if let Err(err) = relayout() {
                    wasm_warn!("Relayout failed: {}", err);
                }
            });
            dom::window()?
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .map_err(|e| GalleryError::js(&e))?;
            Some(on_resize)
        } else {
            None
        };

        Ok(Self { container, click, resize })
    }

    fn serves(&self, container: &Element, relayout_on_resize: bool) -> bool {
        self.container.is_same_node(Some(container)) && self.resize.is_some() == relayout_on_resize
    }

    fn detach(self) -> Result<(), GalleryError> {
        self.container
            .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref())
            .map_err(|e| GalleryError::js(&e))?;
        if let Some(on_resize) = &self.resize {
            dom::window()?
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                .map_err(|e| GalleryError::js(&e))?;
        }
        Ok(())
    }
}

fn handle_grid_click(target: &Element) -> Result<(), GalleryError> {
    if let Some((_, pid)) = dom::closest_attr(target, "data-pid") {
        return open_photo(&PhotoRef::Id(pid), false).map(|_| ());
    }
    if let Some(pid) = target.get_attribute("src").and_then(|src| photo_id_from_thumb_url(&src)) {
        return open_photo(&PhotoRef::Id(pid), false).map(|_| ());
    }
    if let Some((_, modal_id)) = dom::closest_attr(target, "data-target").filter(|(_, id)| !id.is_empty()) {
        let active_class = with_state(|state| Ok(state.config.grid.modal_active_class.clone()))?;
        return grid::open_menu_modal(&modal_id, &active_class);
    }
    Ok(())
}
