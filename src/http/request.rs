//! Request descriptions for the album/image endpoints
//!
//! | Action        | Method | Path                  |
//! |---------------|--------|-----------------------|
//! | Update album  | POST   | `/album/{id}`         |
//! | Delete album  | DELETE | `/album/{id}`         |
//! | Update photo  | POST   | `/image/{id}`         |
//! | Delete photo  | DELETE | `/image/{id}`         |
//! | Rotate photo  | POST   | `/image/{id}/rotate`  |
//!
//! Bodies are form-encoded; an unset optional field is sent as an empty
//! value, which the server stores as null.
//!
//! Ids are opaque, so paths are kept as segments and each segment is
//! percent-encoded when the URL is built.

use serde::Serialize;
use std::fmt;

use crate::models::{Album, Photo};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Unencoded path segments, e.g. `["image", id, "rotate"]`
    pub segments: Vec<String>,
    /// Form fields, in order; empty for bodiless requests
    pub form: Vec<(String, String)>,
}

impl ApiRequest {
    fn new(method: Method, segments: &[&str]) -> Self {
        Self {
            method,
            segments: segments.iter().map(|s| s.to_string()).collect(),
            form: Vec::new(),
        }
    }

    fn field(mut self, name: &str, value: Option<&str>) -> Self {
        self.form.push((name.to_string(), value.unwrap_or_default().to_string()));
        self
    }

    /// Full album record
    pub fn update_album(album: &Album) -> Self {
        Self::new(Method::Post, &["album", album.id.as_str()])
            .field("title", Some(&album.title))
            .field("description", album.description.as_deref())
            .field("coverPhotoId", album.cover_photo_id.as_deref())
    }

    pub fn delete_album(album_id: &str) -> Self {
        Self::new(Method::Delete, &["album", album_id])
    }

    pub fn update_photo(photo: &Photo) -> Self {
        Self::new(Method::Post, &["image", photo.pid.as_str()])
            .field("description", photo.description.as_deref())
    }

    pub fn delete_photo(photo_id: &str) -> Self {
        Self::new(Method::Delete, &["image", photo_id])
    }

    pub fn rotate_photo(photo_id: &str) -> Self {
        Self::new(Method::Post, &["image", photo_id, "rotate"])
    }

    /// Readable path, segments joined as they are
    pub fn path(&self) -> String {
        self.encoded_path(|segment| segment.to_string())
    }

    /// Path with every segment passed through `encode`
    pub fn encoded_path(&self, encode: impl Fn(&str) -> String) -> String {
        self.segments.iter().fold(String::new(), |mut path, segment| {
            path.push('/');
            path.push_str(&encode(segment));
            path
        })
    }

    pub fn has_body(&self) -> bool {
        !self.form.is_empty()
    }

    /// Value of a form field
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_album_sends_full_record() {
        let album = Album {
            id: "a1".to_string(),
            title: "Trip".to_string(),
            description: None,
            cover_photo_id: Some("p2".to_string()),
        };
        let req = ApiRequest::update_album(&album);
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path(), "/album/a1");
        assert_eq!(req.form_value("title"), Some("Trip"));
        assert_eq!(req.form_value("description"), Some(""));
        assert_eq!(req.form_value("coverPhotoId"), Some("p2"));
    }

    #[test]
    fn test_bodiless_requests() {
        assert_eq!(ApiRequest::rotate_photo("p1").to_string(), "POST /image/p1/rotate");
        assert!(!ApiRequest::rotate_photo("p1").has_body());
        assert_eq!(ApiRequest::delete_album("a1").to_string(), "DELETE /album/a1");
        assert_eq!(ApiRequest::delete_photo("p1").to_string(), "DELETE /image/p1");
    }

    #[test]
    fn test_each_segment_encoded_separately() {
        let req = ApiRequest::rotate_photo("a/b c");
        assert_eq!(req.segments, vec!["image", "a/b c", "rotate"]);
        let encoded = req.encoded_path(|s| s.replace('/', "%2F").replace(' ', "%20"));
        assert_eq!(encoded, "/image/a%2Fb%20c/rotate");
    }
}
