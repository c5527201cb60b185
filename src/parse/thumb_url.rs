//! Thumbnail URL helpers
//!
//! Thumbnails are served as `<dir>/<photo id>.thumb.jpg`, optionally with a
//! `?t=<timestamp>` query appended after a rotation.

use once_cell::sync::Lazy;
use regex::Regex;

static THUMB_FILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|/)([^/?#]+)\.thumb\.jpg(?:[?#].*)?$").expect("valid thumbnail regex"));

/// Photo id encoded in a thumbnail URL, if it follows the thumbnail naming
pub fn photo_id_from_thumb_url(url: &str) -> Option<String> {
    THUMB_FILE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Replace any query string (and fragment) with `?t=<timestamp>` so the
/// browser refetches the image
pub fn cache_busted_url(url: &str, timestamp: u64) -> String {
    let base = url.split(['?', '#']).next().unwrap_or(url);
    format!("{}?t={}", base, timestamp)
}
