//! Event wiring for the album edit page
//!
//! Each handler stages its change on the shared [`AlbumSession`], sends the
//! request on its own and commits only on success. Failures discard the
//! staged change, are shown with `alert`, and put the edited field back to
//! the session's value.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, HtmlInputElement, HtmlTextAreaElement};

use super::{attr_selector, query_all, query_opt, window};
use crate::config::EditorConfig;
use crate::editor::{AfterDelete, AlbumChange, AlbumSession, EditOutcome};
use crate::error::GalleryError;
use crate::http::client;
use crate::parse::cache_busted_url;

pub type SharedSession = Rc<RefCell<AlbumSession>>;

type StageAlbumFn = fn(&mut AlbumSession, &str) -> EditOutcome<AlbumChange>;
type StoredTextFn = fn(&AlbumSession) -> String;

/// Wire every editor control present on the page
pub fn bind_editor(session: SharedSession, config: Rc<EditorConfig>) -> Result<(), GalleryError> {
    bind_album_field(
        &session,
        &config.album_title_selector,
        AlbumSession::stage_title,
        |s| s.working_album().title,
    )?;
    bind_album_field(
        &session,
        &config.album_description_selector,
        AlbumSession::stage_album_description,
        |s| s.working_album().description.unwrap_or_default(),
    )?;
    bind_photo_descriptions(&session, &config)?;
    bind_cover_buttons(&session, &config)?;
    bind_rotate_buttons(&session, &config)?;
    bind_delete_buttons(&session, &config)?;
    bind_confirm_modal(&session, &config)?;
    Ok(())
}

// ============================================================================
// DOM helpers
// ============================================================================

fn on<F>(target: &Element, event: &str, handler: F) -> Result<(), GalleryError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| GalleryError::js(&e))?;
    closure.forget();
    Ok(())
}

/// Current text of an input, textarea or contenteditable element
fn field_text(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        element.text_content().unwrap_or_default()
    }
}

fn set_field_text(element: &Element, text: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(text);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(text);
    } else {
        element.set_text_content(Some(text));
    }
}

fn data_id(element: &Element) -> Option<String> {
    element.get_attribute("data-id")
}

fn report_failure(err: &GalleryError) {
    crate::wasm_error!("edit failed: {}", err);
    if let Ok(window) = window() {
        let _ = window.alert_with_message(&format!("Saving failed: {}", err));
    }
}

fn set_modal_visible(config: &EditorConfig, visible: bool) {
    let modal = match query_opt(&config.confirm_modal_selector) {
        Ok(Some(modal)) => modal,
        _ => {
            log::warn!("confirm modal {} not found", config.confirm_modal_selector);
            return;
        }
    };
    let classes = modal.class_list();
    let result = if visible {
        classes.add_1(&config.modal_active_class)
    } else {
        classes.remove_1(&config.modal_active_class)
    };
    if let Err(e) = result {
        log::warn!("could not toggle confirm modal: {:?}", e);
    }
}

// ============================================================================
// Text fields
// ============================================================================

fn bind_album_field(
    session: &SharedSession,
    selector: &str,
    stage: StageAlbumFn,
    stored: StoredTextFn,
) -> Result<(), GalleryError> {
    let Some(element) = query_opt(selector)? else {
        log::debug!("no {} on this page", selector);
        return Ok(());
    };

    let session = session.clone();
    let field = element.clone();
    on(&element, "blur", move |_| {
        let outcome = stage(&mut session.borrow_mut(), &field_text(&field));
        match outcome {
            EditOutcome::Unchanged => {}
            EditOutcome::Revert(previous) => set_field_text(&field, &previous),
            EditOutcome::Submit(staged) => {
                let session = session.clone();
                let field = field.clone();
                spawn_local(async move {
                    match client::send(&staged.request).await {
                        Ok(()) => {
                            session.borrow_mut().commit_album(&staged.change);
                        }
                        Err(err) => {
                            session.borrow_mut().discard_album(&staged.change);
                            set_field_text(&field, &stored(&session.borrow()));
                            report_failure(&err);
                        }
                    }
                });
            }
        }
    })
}

fn bind_photo_descriptions(session: &SharedSession, config: &EditorConfig) -> Result<(), GalleryError> {
    for element in query_all(&config.photo_description_selector)? {
        let Some(photo_id) = data_id(&element) else {
            continue;
        };
        let session = session.clone();
        let field = element.clone();
        on(&element, "blur", move |_| {
            let outcome = session
                .borrow()
                .stage_photo_description(&photo_id, &field_text(&field));
            match outcome {
                Ok(EditOutcome::Unchanged) => {}
                Ok(EditOutcome::Revert(previous)) => set_field_text(&field, &previous),
                Ok(EditOutcome::Submit(staged)) => {
                    let session = session.clone();
                    let field = field.clone();
                    spawn_local(async move {
                        match client::send(&staged.request).await {
                            Ok(()) => {
                                let _ = session.borrow_mut().commit_photo(&staged.change);
                            }
                            Err(err) => {
                                let stored = session
                                    .borrow()
                                    .photo(&staged.change.photo_id)
                                    .ok()
                                    .and_then(|p| p.description.clone())
                                    .unwrap_or_default();
                                set_field_text(&field, &stored);
                                report_failure(&err);
                            }
                        }
                    });
                }
                Err(err) => report_failure(&err),
            }
        })?;
    }
    Ok(())
}

// ============================================================================
// Buttons
// ============================================================================

fn bind_cover_buttons(session: &SharedSession, config: &Rc<EditorConfig>) -> Result<(), GalleryError> {
    for button in query_all(&config.cover_button_selector)? {
        let Some(photo_id) = data_id(&button) else {
            continue;
        };
        let session = session.clone();
        let config = config.clone();
        on(&button, "click", move |_| {
            let outcome = session.borrow_mut().stage_cover(&photo_id);
            let staged = match outcome {
                Ok(EditOutcome::Submit(staged)) => staged,
                Ok(_) => return,
                Err(err) => return report_failure(&err),
            };
            let session = session.clone();
            let config = config.clone();
            let photo_id = photo_id.clone();
            spawn_local(async move {
                if let Err(err) = client::send(&staged.request).await {
                    session.borrow_mut().discard_album(&staged.change);
                    return report_failure(&err);
                }
                let previous = session.borrow_mut().commit_album(&staged.change);
                if let Err(err) = toggle_cover_buttons(&config, previous.cover_photo_id.as_deref(), &photo_id) {
                    log::warn!("cover buttons not updated: {}", err);
                }
            });
        })?;
    }
    Ok(())
}

/// Enable the old cover's button and disable the new one's
pub fn toggle_cover_buttons(config: &EditorConfig, old_cover: Option<&str>, new_cover: &str) -> Result<(), GalleryError> {
    if let Some(old_cover) = old_cover {
        let selector = format!("{}{}", config.cover_button_selector, attr_selector("data-id", old_cover));
        if let Some(old) = query_opt(&selector)? {
            old.remove_attribute("disabled").map_err(|e| GalleryError::js(&e))?;
        }
    }
    let selector = format!("{}{}", config.cover_button_selector, attr_selector("data-id", new_cover));
    if let Some(new) = query_opt(&selector)? {
        new.set_attribute("disabled", "").map_err(|e| GalleryError::js(&e))?;
    }
    Ok(())
}

fn bind_rotate_buttons(session: &SharedSession, config: &Rc<EditorConfig>) -> Result<(), GalleryError> {
    for button in query_all(&config.rotate_button_selector)? {
        let Some(photo_id) = data_id(&button) else {
            continue;
        };
        let session = session.clone();
        let config = config.clone();
        on(&button, "click", move |_| {
            let request = match session.borrow().rotate_request(&photo_id) {
                Ok(request) => request,
                Err(err) => return report_failure(&err),
            };
            let session = session.clone();
            let config = config.clone();
            let photo_id = photo_id.clone();
            spawn_local(async move {
                if let Err(err) = client::send(&request).await {
                    return report_failure(&err);
                }
                let _ = session.borrow_mut().commit_rotation(&photo_id);
                if let Err(err) = refresh_thumbnail(&config, &photo_id) {
                    log::warn!("thumbnail for {} not refreshed: {}", photo_id, err);
                }
            });
        })?;
    }
    Ok(())
}

/// Cache-bust the rotated photo's thumbnail so the browser refetches it
pub fn refresh_thumbnail(config: &EditorConfig, photo_id: &str) -> Result<(), GalleryError> {
    let selector = format!("{}{}", config.thumbnail_selector, attr_selector("data-id", photo_id));
    let Some(thumb) = query_opt(&selector)? else {
        return Ok(());
    };
    let src = thumb.get_attribute("src").unwrap_or_default();
    let busted = cache_busted_url(&src, js_sys::Date::now() as u64);
    thumb.set_attribute("src", &busted).map_err(|e| GalleryError::js(&e))
}

fn bind_delete_buttons(session: &SharedSession, config: &Rc<EditorConfig>) -> Result<(), GalleryError> {
    if let Some(button) = query_opt(&config.delete_album_selector)? {
        let session = session.clone();
        let config = config.clone();
        on(&button, "click", move |_| {
            session.borrow_mut().request_delete_album();
            set_modal_visible(&config, true);
        })?;
    }

    for button in query_all(&config.delete_photo_selector)? {
        let Some(photo_id) = data_id(&button) else {
            continue;
        };
        let session = session.clone();
        let config = config.clone();
        on(&button, "click", move |_| {
            if let Err(err) = session.borrow_mut().request_delete_photo(&photo_id) {
                return report_failure(&err);
            }
            set_modal_visible(&config, true);
        })?;
    }
    Ok(())
}

fn bind_confirm_modal(session: &SharedSession, config: &Rc<EditorConfig>) -> Result<(), GalleryError> {
    if let Some(confirm) = query_opt(&config.confirm_button_selector)? {
        let session = session.clone();
        let config = config.clone();
        on(&confirm, "click", move |_| {
            let Some(action) = session.borrow_mut().take_pending() else {
                return;
            };
            set_modal_visible(&config, false);
            let config = config.clone();
            spawn_local(async move {
                if let Err(err) = client::send(&action.request()).await {
                    return report_failure(&err);
                }
                if let Err(err) = leave_page(action.after_success(&config.admin_path)) {
                    crate::wasm_error!("navigation after delete failed: {}", err);
                }
            });
        })?;
    }

    for cancel in query_all(&config.cancel_button_selector)? {
        let session = session.clone();
        let config = config.clone();
        on(&cancel, "click", move |_| {
            session.borrow_mut().cancel_pending();
            set_modal_visible(&config, false);
        })?;
    }
    Ok(())
}

fn leave_page(after: AfterDelete) -> Result<(), GalleryError> {
    let location = window()?.location();
    let result = match after {
        AfterDelete::Navigate(path) => location.set_href(&path),
        AfterDelete::Reload => location.reload(),
    };
    result.map_err(|e| GalleryError::js(&e))
}
