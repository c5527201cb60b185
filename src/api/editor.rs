//! WASM API for the album edit page

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_or_default, page_global, to_js_error};
use crate::config::EditorConfig;
use crate::dom::editor_bindings;
use crate::editor::AlbumSession;
use crate::models::{Album, Photo};
use crate::wasm_info;

/// Wire the inline editor for one album
///
/// # Parameters
/// - `album`: the Album object being edited
/// - `album_photos`: its photos, each with `pid` matching the controls' `data-id`
/// - `config`: optional `EditorConfig` object with element selectors
#[wasm_bindgen(js_name = initAlbumEditor)]
pub fn init_album_editor(album: JsValue, album_photos: JsValue, config: JsValue) -> Result<(), JsValue> {
    let album: Album = deserialize(album, "Album deserialization error")?;
    let photos: Vec<Photo> = deserialize_or_default(album_photos, "Album photos deserialization error")?;
    let config: EditorConfig = deserialize_or_default(config, "Editor config deserialization error")?;

    wasm_info!("initAlbumEditor called: album={}, {} photos", album.id, photos.len());

    let session = Rc::new(RefCell::new(AlbumSession::new(album, photos)));
    editor_bindings::bind_editor(session, Rc::new(config)).map_err(to_js_error)
}

/// Same as `initAlbumEditor`, reading the page globals `album` and `albumPhotos`
#[wasm_bindgen(js_name = initAlbumEditorFromPage)]
pub fn init_album_editor_from_page(config: JsValue) -> Result<(), JsValue> {
    init_album_editor(page_global("album")?, page_global("albumPhotos")?, config)
}
