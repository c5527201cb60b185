//! Browser tests for the DOM layer
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use picfolio_wasm::api::init_gallery;
use picfolio_wasm::dom::editor_bindings::{bind_editor, refresh_thumbnail, toggle_cover_buttons};
use picfolio_wasm::dom::grid::render_grid;
use picfolio_wasm::editor::{AlbumSession, PendingAction};
use picfolio_wasm::models::Gallery;
use picfolio_wasm::{EditorConfig, GridConfig};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container(id: &str, width: u32) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    element
        .dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .set_property("width", &format!("{}px", width))
        .unwrap();
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn child(parent: &Element, tag: &str, attrs: &[(&str, &str)]) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element(tag).unwrap();
    for (name, value) in attrs {
        element.set_attribute(name, value).unwrap();
    }
    parent.append_child(&element).unwrap();
    element
}

fn click(element: &Element) {
    element.dyn_ref::<HtmlElement>().unwrap().click();
}

fn json(text: &str) -> JsValue {
    js_sys::JSON::parse(text).unwrap()
}

fn gallery() -> Gallery {
    Gallery::from_json(
        r#"[{"pid":"p1","w":800,"h":600,"msrc":"/images/p1.thumb.jpg","src":"/images/p1.jpg"},
            {"pid":"p2","w":600,"h":800,"msrc":"/images/p2.thumb.jpg","src":"/images/p2.jpg"},
            {"pid":"p3","w":1000,"h":1000,"msrc":"/images/p3.thumb.jpg","src":"/images/p3.jpg"}]"#,
        Some(r#"[{"uploadButton":true,"menuTarget":"upload-modal","menuText":"Upload"}]"#),
    )
    .unwrap()
}

#[wasm_bindgen_test]
fn test_grid_renders_one_child_per_tile() {
    let container = container("grid-children", 800);
    render_grid(&container, &gallery(), &GridConfig::default()).unwrap();

    let children = container.children();
    assert_eq!(children.length(), 4);
    assert!(children.item(0).unwrap().class_list().contains("menu-tile"));
    let pids: Vec<String> = (1..4)
        .map(|i| {
            children
                .item(i)
                .unwrap()
                .query_selector("img")
                .unwrap()
                .unwrap()
                .get_attribute("data-pid")
                .unwrap()
        })
        .collect();
    assert_eq!(pids, vec!["p1", "p2", "p3"]);
}

#[wasm_bindgen_test]
fn test_grid_rerender_replaces_children() {
    let container = container("grid-rerender", 640);
    let config = GridConfig::default();
    render_grid(&container, &gallery(), &config).unwrap();
    render_grid(&container, &gallery(), &config).unwrap();
    assert_eq!(container.children().length(), 4);
}

#[wasm_bindgen_test]
fn test_menu_click_follows_latest_container() {
    let first = container("rebind-first", 600);
    let second = container("rebind-second", 600);
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    let first_modal = child(&body, "div", &[("id", "modal-first")]);
    let second_modal = child(&body, "div", &[("id", "modal-second")]);

    init_gallery(
        json("[]"),
        json(r#"[{"menuTarget":"modal-first","menuText":"First"}]"#),
        json(r##"{"grid":{"containerSelector":"#rebind-first","relayoutOnResize":false},"lightbox":{"openFromHash":false}}"##),
    )
    .unwrap();
    init_gallery(
        json("[]"),
        json(r#"[{"menuTarget":"modal-second","menuText":"Second"}]"#),
        json(r##"{"grid":{"containerSelector":"#rebind-second","relayoutOnResize":false},"lightbox":{"openFromHash":false}}"##),
    )
    .unwrap();

    click(&first.children().item(0).unwrap());
    assert!(!first_modal.class_list().contains("is-active"));

    click(&second.children().item(0).unwrap());
    assert!(second_modal.class_list().contains("is-active"));
}

#[wasm_bindgen_test]
fn test_refresh_thumbnail_touches_only_rotated_photo() {
    let list = container("thumb-refresh", 400);
    let rotated = child(&list, "img", &[("class", "refresh-thumb"), ("data-id", "p1"), ("src", "/images/p1.thumb.jpg?t=1")]);
    let other = child(&list, "img", &[("class", "refresh-thumb"), ("data-id", "p2"), ("src", "/images/p2.thumb.jpg")]);
    let config = EditorConfig {
        thumbnail_selector: ".refresh-thumb".to_string(),
        ..EditorConfig::default()
    };

    refresh_thumbnail(&config, "p1").unwrap();

    let src = rotated.get_attribute("src").unwrap();
    assert!(src.starts_with("/images/p1.thumb.jpg?t="));
    assert_ne!(src, "/images/p1.thumb.jpg?t=1");
    assert_eq!(src.matches('?').count(), 1);
    assert_eq!(other.get_attribute("src").unwrap(), "/images/p2.thumb.jpg");
}

#[wasm_bindgen_test]
fn test_toggle_cover_buttons_moves_disabled() {
    let list = container("cover-toggle", 400);
    let old = child(&list, "button", &[("class", "toggle-cover"), ("data-id", "p1"), ("disabled", "")]);
    let new = child(&list, "button", &[("class", "toggle-cover"), ("data-id", "p2")]);
    let untouched = child(&list, "button", &[("class", "toggle-cover"), ("data-id", "p3")]);
    let config = EditorConfig {
        cover_button_selector: ".toggle-cover".to_string(),
        ..EditorConfig::default()
    };

    toggle_cover_buttons(&config, Some("p1"), "p2").unwrap();

    assert!(!old.has_attribute("disabled"));
    assert!(new.has_attribute("disabled"));
    assert!(!untouched.has_attribute("disabled"));
}

#[wasm_bindgen_test]
fn test_cleared_title_blur_restores_text() {
    let page = container("title-blur-page", 400);
    let title = child(&page, "h1", &[("id", "title-blur"), ("contenteditable", "true")]);
    title.set_text_content(Some("Summer"));
    let session = Rc::new(RefCell::new(
        AlbumSession::from_json(r#"{"id":"a9","title":"Summer"}"#, "[]").unwrap(),
    ));
    let config = EditorConfig {
        album_title_selector: "#title-blur".to_string(),
        ..EditorConfig::default()
    };
    bind_editor(session.clone(), Rc::new(config)).unwrap();

    title.set_text_content(Some("  "));
    title.dispatch_event(&Event::new("blur").unwrap()).unwrap();

    assert_eq!(title.text_content().unwrap(), "Summer");
    assert!(session.borrow().unconfirmed_album_changes().is_empty());
    assert_eq!(session.borrow().album().title, "Summer");
}

#[wasm_bindgen_test]
fn test_delete_then_cancel_closes_modal() {
    let page = container("delete-cancel-page", 400);
    let modal = child(&page, "div", &[("id", "confirm-cancel-test")]);
    let delete = child(&page, "button", &[("class", "delete-cancel-test"), ("data-id", "p1")]);
    let cancel = child(&modal, "button", &[("class", "cancel-cancel-test")]);
    let session = Rc::new(RefCell::new(
        AlbumSession::from_json(
            r#"{"id":"a9","title":"Summer"}"#,
            r#"[{"pid":"p1","w":800,"h":600,"msrc":"/images/p1.thumb.jpg","src":"/images/p1.jpg"}]"#,
        )
        .unwrap(),
    ));
    let config = EditorConfig {
        delete_photo_selector: ".delete-cancel-test".to_string(),
        delete_album_selector: "#no-delete-album".to_string(),
        confirm_modal_selector: "#confirm-cancel-test".to_string(),
        confirm_button_selector: "#no-confirm".to_string(),
        cancel_button_selector: ".cancel-cancel-test".to_string(),
        ..EditorConfig::default()
    };
    bind_editor(session.clone(), Rc::new(config)).unwrap();

    click(&delete);
    assert!(modal.class_list().contains("is-active"));
    assert_eq!(session.borrow().pending(), Some(&PendingAction::DeletePhoto("p1".to_string())));

    click(&cancel);
    assert!(!modal.class_list().contains("is-active"));
    assert!(session.borrow().pending().is_none());
}
