//! Lightbox controller
//!
//! Resolves what the user asked to open (a photo id from a click or deep
//! link, or a precomputed index) into a gallery index and builds the
//! PhotoSwipe options for it. The actual viewer call lives in
//! [`photoswipe`], which only runs in the browser.

pub mod photoswipe;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::models::Photo;
use crate::parse::HashParams;

/// Reference to the photo the lightbox should open on
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoRef {
    Id(String),
    Index(usize),
}

impl From<&str> for PhotoRef {
    fn from(id: &str) -> Self {
        PhotoRef::Id(id.to_string())
    }
}

impl From<usize> for PhotoRef {
    fn from(index: usize) -> Self {
        PhotoRef::Index(index)
    }
}

/// Resolve a photo reference to its index in lightbox order
pub fn resolve_index(photos: &[Photo], photo: &PhotoRef) -> Result<usize, GalleryError> {
    match photo {
        PhotoRef::Id(id) => photos
            .iter()
            .position(|p| &p.pid == id)
            .ok_or_else(|| GalleryError::UnknownPhoto(id.clone())),
        PhotoRef::Index(index) if *index < photos.len() => Ok(*index),
        PhotoRef::Index(index) => Err(GalleryError::IndexOutOfRange {
            index: *index,
            len: photos.len(),
        }),
    }
}

/// Photo a deep link asks for, if it targets this gallery
///
/// A link without `gid` is taken to mean the only gallery on the page.
pub fn deep_link_target(params: &HashParams, gallery_uid: i64) -> Option<PhotoRef> {
    let pid = params.pid.as_ref().filter(|pid| !pid.is_empty())?;
    match params.gid {
        Some(gid) if gid != gallery_uid => None,
        _ => Some(PhotoRef::Id(pid.clone())),
    }
}

/// Source rectangle of the open/close zoom animation, in page coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ThumbBounds {
    pub x: f64,
    pub y: f64,
    pub w: f64,
}

impl ThumbBounds {
    /// From a viewport-relative bounding rect and the current vertical scroll
    pub fn from_client_rect(left: f64, top: f64, width: f64, page_y_scroll: f64) -> Self {
        Self {
            x: left,
            y: top + page_y_scroll,
            w: width,
        }
    }
}

/// Options passed to PhotoSwipe, minus the bounds callback
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LightboxOptions {
    pub index: usize,
    #[serde(rename = "galleryPIDs")]
    pub gallery_pids: bool,
    #[serde(rename = "galleryUID")]
    pub gallery_uid: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_animation_duration: Option<u32>,
}

impl LightboxOptions {
    pub fn new(index: usize, gallery_uid: i64, disable_animation: bool) -> Self {
        Self {
            index,
            gallery_pids: true,
            gallery_uid,
            show_animation_duration: disable_animation.then_some(0),
        }
    }
}

/// PhotoSwipe slide item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SlideItem {
    pub pid: String,
    pub src: String,
    pub msrc: String,
    pub w: u32,
    pub h: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl From<&Photo> for SlideItem {
    fn from(photo: &Photo) -> Self {
        Self {
            pid: photo.pid.clone(),
            src: photo.src.clone(),
            msrc: photo.msrc.clone(),
            w: photo.w,
            h: photo.h,
            title: photo.title.clone().or_else(|| photo.description.clone()),
        }
    }
}

pub fn slide_items(photos: &[Photo]) -> Vec<SlideItem> {
    photos.iter().map(SlideItem::from).collect()
}
