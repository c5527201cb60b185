//! Parsing of URL fragments and thumbnail URLs

pub mod hash;
pub mod thumb_url;

pub use hash::{parse_hash, HashParams};
pub use thumb_url::{cache_busted_url, photo_id_from_thumb_url};
