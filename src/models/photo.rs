//! Photo and album records
//!
//! Field names follow the page's JSON (`pid`, `msrc`, `coverPhotoId`), which
//! is also what PhotoSwipe expects for its slide items.

use serde::{Deserialize, Serialize};

/// A single photo as supplied by the page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Photo {
    /// Photo identifier, also used as the PhotoSwipe `pid`
    pub pid: String,

    /// Natural width in pixels
    pub w: u32,

    /// Natural height in pixels
    pub h: u32,

    /// Thumbnail URL
    pub msrc: String,

    /// Full-size image URL
    pub src: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Caption shown by the lightbox
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Photo {
    /// Width over height of the natural image
    pub fn aspect(&self) -> f64 {
        if self.h == 0 {
            1.0
        } else {
            self.w as f64 / self.h as f64
        }
    }

    /// Swap width and height after a quarter turn
    pub fn rotate_quarter(&mut self) {
        std::mem::swap(&mut self.w, &mut self.h);
    }
}

/// An album as supplied by the edit page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_photo_id: Option<String>,
}
