//! PhotoSwipe v4 bindings
//!
//! The page loads `photoswipe.js` and `photoswipe-ui-default.js`; this module
//! only binds the constructor and hands it the slides and options.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::{resolve_index, slide_items, LightboxOptions, PhotoRef, ThumbBounds};
use crate::config::LightboxConfig;
use crate::dom;
use crate::error::GalleryError;
use crate::models::Photo;

#[wasm_bindgen]
extern "C" {
    type PhotoSwipe;

    #[wasm_bindgen(constructor, catch)]
    fn new(
        template: &Element,
        ui: &JsValue,
        items: &JsValue,
        options: &JsValue,
    ) -> Result<PhotoSwipe, JsValue>;

    #[wasm_bindgen(method)]
    fn init(this: &PhotoSwipe);
}

/// Open the viewer on `photo`. Returns the resolved index.
pub fn open(
    photos: &[Photo],
    photo: &PhotoRef,
    disable_animation: bool,
    config: &LightboxConfig,
    grid_selector: &str,
) -> Result<usize, GalleryError> {
    let index = resolve_index(photos, photo)?;

    let template = dom::query(&config.pswp_selector)?;
    let ui = Reflect::get(&js_sys::global(), &JsValue::from_str("PhotoSwipeUI_Default"))
        .map_err(|e| GalleryError::js(&e))?;
    if ui.is_undefined() {
        return Err(GalleryError::Js("PhotoSwipeUI_Default is not loaded".to_string()));
    }

    let items = serde_wasm_bindgen::to_value(&slide_items(photos))?;
    let options: Object = serde_wasm_bindgen::to_value(&LightboxOptions::new(
        index,
        config.gallery_uid,
        disable_animation,
    ))?
    .into();

    let pids: Vec<String> = photos.iter().map(|p| p.pid.clone()).collect();
    let grid_selector = grid_selector.to_string();
    let bounds_fn = Closure::<dyn FnMut(usize) -> JsValue>::new(move |index: usize| {
        pids.get(index)
            .and_then(|pid| thumb_bounds(&grid_selector, pid))
            .and_then(|bounds| serde_wasm_bindgen::to_value(&bounds).ok())
            .unwrap_or(JsValue::UNDEFINED)
    });
    Reflect::set(&options, &JsValue::from_str("getThumbBoundsFn"), &bounds_fn.into_js_value())
        .map_err(|e| GalleryError::js(&e))?;

    let gallery = PhotoSwipe::new(&template, &ui, &items, &options).map_err(|e| GalleryError::js(&e))?;
    gallery.init();

    log::info!("lightbox opened at index {} (animation {})", index, !disable_animation);
    Ok(index)
}

/// Live page-relative bounds of the thumbnail for `pid`
fn thumb_bounds(grid_selector: &str, pid: &str) -> Option<ThumbBounds> {
    let selector = format!("{} {}", grid_selector, dom::attr_selector("data-pid", pid));
    let thumb = dom::query_opt(&selector).ok().flatten()?;
    let rect = thumb.get_bounding_client_rect();
    let scroll = dom::window().ok()?.page_y_offset().unwrap_or(0.0);
    Some(ThumbBounds::from_client_rect(rect.left(), rect.top(), rect.width(), scroll))
}
