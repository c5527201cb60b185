//! Album editing session
//!
//! Explicit view model for the edit page: the album, its photos and the
//! pending delete. `stage_*` methods return the change and the request that
//! persists it; the stored records only change in `commit_*`, after the
//! request succeeded, so a failed request leaves the session matching the
//! server.
//!
//! The album endpoint takes the whole record. Album changes whose request is
//! still in flight are kept as unconfirmed, and every new album request is
//! built from the stored album with those applied on top, so an edit made
//! while an earlier one is pending never sends the old value back. A failed
//! request drops its change with `discard_album`.
//!
//! Changes are applied field by field, so a slow request finishing after a
//! newer edit only touches the field it carried.

use crate::error::GalleryError;
use crate::http::ApiRequest;
use crate::models::{Album, Photo};

use super::field::{diff_field, ClearPolicy, FieldChange};
use super::pending::PendingAction;

/// A single-field change to the album
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlbumChange {
    Title(String),
    Description(Option<String>),
    Cover(String),
}

impl AlbumChange {
    fn apply(&self, album: &mut Album) {
        match self {
            AlbumChange::Title(title) => album.title = title.clone(),
            AlbumChange::Description(description) => album.description = description.clone(),
            AlbumChange::Cover(photo_id) => album.cover_photo_id = Some(photo_id.clone()),
        }
    }
}

/// A description change on one photo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoChange {
    pub photo_id: String,
    pub description: Option<String>,
}

/// A change waiting for its request to succeed
#[derive(Clone, Debug, PartialEq)]
pub struct StagedUpdate<C> {
    pub request: ApiRequest,
    pub change: C,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EditOutcome<C> {
    /// Nothing to send
    Unchanged,
    /// Restore this value in the DOM, nothing to send
    Revert(String),
    Submit(StagedUpdate<C>),
}

impl<C> EditOutcome<C> {
    pub fn request(&self) -> Option<&ApiRequest> {
        match self {
            EditOutcome::Submit(staged) => Some(&staged.request),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlbumSession {
    album: Album,
    photos: Vec<Photo>,
    /// Album changes sent but not yet answered, oldest first
    unconfirmed: Vec<AlbumChange>,
    pending: Option<PendingAction>,
}

impl AlbumSession {
    pub fn new(album: Album, photos: Vec<Photo>) -> Self {
        Self { album, photos, unconfirmed: Vec::new(), pending: None }
    }

    /// Build from page data given as JSON text
    pub fn from_json(album: &str, photos: &str) -> Result<Self, GalleryError> {
        Ok(Self::new(serde_json::from_str(album)?, serde_json::from_str(photos)?))
    }

    pub fn album(&self) -> &Album {
        &self.album
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo(&self, photo_id: &str) -> Result<&Photo, GalleryError> {
        self.photos
            .iter()
            .find(|p| p.pid == photo_id)
            .ok_or_else(|| GalleryError::UnknownPhoto(photo_id.to_string()))
    }

    fn photo_mut(&mut self, photo_id: &str) -> Result<&mut Photo, GalleryError> {
        self.photos
            .iter_mut()
            .find(|p| p.pid == photo_id)
            .ok_or_else(|| GalleryError::UnknownPhoto(photo_id.to_string()))
    }

    /// The album as it will be once every unconfirmed change is accepted
    pub fn working_album(&self) -> Album {
        let mut album = self.album.clone();
        for change in &self.unconfirmed {
            change.apply(&mut album);
        }
        album
    }

    pub fn unconfirmed_album_changes(&self) -> &[AlbumChange] {
        &self.unconfirmed
    }

    fn stage_album(&mut self, change: AlbumChange) -> EditOutcome<AlbumChange> {
        let mut staged = self.working_album();
        change.apply(&mut staged);
        self.unconfirmed.push(change.clone());
        EditOutcome::Submit(StagedUpdate {
            request: ApiRequest::update_album(&staged),
            change,
        })
    }

    fn settle(&mut self, change: &AlbumChange) {
        if let Some(position) = self.unconfirmed.iter().position(|c| c == change) {
            self.unconfirmed.remove(position);
        }
    }

    // ========================================================================
    // Album fields
    // ========================================================================

    /// Title edits; clearing the title is refused
    pub fn stage_title(&mut self, text: &str) -> EditOutcome<AlbumChange> {
        let current = self.working_album().title;
        match diff_field(Some(current.as_str()), text, ClearPolicy::Revert) {
            FieldChange::Unchanged => EditOutcome::Unchanged,
            FieldChange::Update(Some(title)) => self.stage_album(AlbumChange::Title(title)),
            FieldChange::Update(None) | FieldChange::Revert(_) => EditOutcome::Revert(current),
        }
    }

    /// Description edits; clearing unsets the description
    pub fn stage_album_description(&mut self, text: &str) -> EditOutcome<AlbumChange> {
        let current = self.working_album().description;
        match diff_field(current.as_deref(), text, ClearPolicy::Unset) {
            FieldChange::Unchanged => EditOutcome::Unchanged,
            FieldChange::Revert(old) => EditOutcome::Revert(old),
            FieldChange::Update(description) => self.stage_album(AlbumChange::Description(description)),
        }
    }

    /// Make `photo_id` the album cover
    pub fn stage_cover(&mut self, photo_id: &str) -> Result<EditOutcome<AlbumChange>, GalleryError> {
        self.photo(photo_id)?;
        if self.working_album().cover_photo_id.as_deref() == Some(photo_id) {
            return Ok(EditOutcome::Unchanged);
        }
        Ok(self.stage_album(AlbumChange::Cover(photo_id.to_string())))
    }

    /// Apply an accepted album change; returns the album as it was before
    pub fn commit_album(&mut self, change: &AlbumChange) -> Album {
        self.settle(change);
        let previous = self.album.clone();
        change.apply(&mut self.album);
        previous
    }

    /// Forget a change whose request failed
    pub fn discard_album(&mut self, change: &AlbumChange) {
        self.settle(change);
    }

    // ========================================================================
    // Photo fields
    // ========================================================================

    pub fn stage_photo_description(
        &self,
        photo_id: &str,
        text: &str,
    ) -> Result<EditOutcome<PhotoChange>, GalleryError> {
        let photo = self.photo(photo_id)?;
        let outcome = match diff_field(photo.description.as_deref(), text, ClearPolicy::Unset) {
            FieldChange::Unchanged => EditOutcome::Unchanged,
            FieldChange::Revert(old) => EditOutcome::Revert(old),
            FieldChange::Update(description) => {
                let mut staged = photo.clone();
                staged.description = description.clone();
                EditOutcome::Submit(StagedUpdate {
                    request: ApiRequest::update_photo(&staged),
                    change: PhotoChange {
                        photo_id: photo_id.to_string(),
                        description,
                    },
                })
            }
        };
        Ok(outcome)
    }

    pub fn commit_photo(&mut self, change: &PhotoChange) -> Result<&Photo, GalleryError> {
        let photo = self.photo_mut(&change.photo_id)?;
        photo.description = change.description.clone();
        Ok(photo)
    }

    pub fn rotate_request(&self, photo_id: &str) -> Result<ApiRequest, GalleryError> {
        self.photo(photo_id)?;
        Ok(ApiRequest::rotate_photo(photo_id))
    }

    /// The server turned the image a quarter; mirror that in the record
    pub fn commit_rotation(&mut self, photo_id: &str) -> Result<&Photo, GalleryError> {
        let photo = self.photo_mut(photo_id)?;
        photo.rotate_quarter();
        Ok(photo)
    }

    // ========================================================================
    // Deletes
    // ========================================================================

    pub fn request_delete_album(&mut self) -> &PendingAction {
        self.pending.insert(PendingAction::DeleteAlbum(self.album.id.clone()))
    }

    pub fn request_delete_photo(&mut self, photo_id: &str) -> Result<&PendingAction, GalleryError> {
        self.photo(photo_id)?;
        Ok(self.pending.insert(PendingAction::DeletePhoto(photo_id.to_string())))
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Take the pending action for confirmation
    pub fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Method;

    fn session() -> AlbumSession {
        AlbumSession::from_json(
            r#"{"id":"a1","title":"A","description":"About","coverPhotoId":"p1"}"#,
            r#"[{"pid":"p1","w":800,"h":600,"msrc":"/images/p1.thumb.jpg","src":"/images/p1.jpg","description":"first"},
                {"pid":"p2","w":600,"h":800,"msrc":"/images/p2.thumb.jpg","src":"/images/p2.jpg"}]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_same_title_sends_nothing() {
        assert_eq!(session().stage_title("A"), EditOutcome::Unchanged);
    }

    #[test]
    fn test_cleared_title_reverts() {
        let outcome = session().stage_title("");
        assert_eq!(outcome, EditOutcome::Revert("A".to_string()));
        assert!(outcome.request().is_none());
    }

    #[test]
    fn test_title_change_staged_not_committed() {
        let mut session = session();
        let outcome = session.stage_title("B");
        let EditOutcome::Submit(staged) = outcome else {
            panic!("expected a submit");
        };
        assert_eq!(staged.request.path(), "/album/a1");
        assert_eq!(staged.request.form_value("title"), Some("B"));
        assert_eq!(staged.request.form_value("description"), Some("About"));
        assert_eq!(session.album().title, "A");

        session.commit_album(&staged.change);
        assert_eq!(session.album().title, "B");
    }

    #[test]
    fn test_cleared_description_sends_unset() {
        let mut session = session();
        let EditOutcome::Submit(staged) = session.stage_album_description("") else {
            panic!("expected a submit");
        };
        assert_eq!(staged.change, AlbumChange::Description(None));
        assert_eq!(staged.request.form_value("description"), Some(""));

        session.commit_album(&staged.change);
        assert_eq!(session.album().description, None);
    }

    #[test]
    fn test_cover_change_returns_previous_cover() {
        let mut session = session();
        assert_eq!(session.stage_cover("p1").unwrap(), EditOutcome::Unchanged);

        let EditOutcome::Submit(staged) = session.stage_cover("p2").unwrap() else {
            panic!("expected a submit");
        };
        assert_eq!(staged.request.form_value("coverPhotoId"), Some("p2"));

        let previous = session.commit_album(&staged.change);
        assert_eq!(previous.cover_photo_id.as_deref(), Some("p1"));
        assert_eq!(session.album().cover_photo_id.as_deref(), Some("p2"));
    }

    #[test]
    fn test_cover_unknown_photo() {
        assert!(matches!(session().stage_cover("zz"), Err(GalleryError::UnknownPhoto(_))));
    }

    #[test]
    fn test_photo_description_cleared() {
        let mut session = session();
        let EditOutcome::Submit(staged) = session.stage_photo_description("p1", " ").unwrap() else {
            panic!("expected a submit");
        };
        assert_eq!(staged.request.path(), "/image/p1");
        assert_eq!(staged.request.form_value("description"), Some(""));

        let photo = session.commit_photo(&staged.change).unwrap();
        assert_eq!(photo.description, None);
    }

    #[test]
    fn test_photo_description_both_empty() {
        assert_eq!(
            session().stage_photo_description("p2", "").unwrap(),
            EditOutcome::Unchanged
        );
    }

    #[test]
    fn test_rotation() {
        let mut session = session();
        let request = session.rotate_request("p2").unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path(), "/image/p2/rotate");

        let photo = session.commit_rotation("p2").unwrap();
        assert_eq!((photo.w, photo.h), (800, 600));
        assert_eq!(session.photo("p1").unwrap().w, 800);
    }

    #[test]
    fn test_late_commit_keeps_newer_fields() {
        let mut session = session();
        let EditOutcome::Submit(title) = session.stage_title("Slow") else {
            panic!("expected a submit");
        };
        let EditOutcome::Submit(description) = session.stage_album_description("Fast") else {
            panic!("expected a submit");
        };
        assert_eq!(description.request.form_value("title"), Some("Slow"));

        session.commit_album(&description.change);
        session.commit_album(&title.change);
        assert_eq!(session.album().title, "Slow");
        assert_eq!(session.album().description.as_deref(), Some("Fast"));
        assert!(session.unconfirmed_album_changes().is_empty());
    }

    #[test]
    fn test_album_requests_carry_unconfirmed_fields() {
        let mut session = session();
        let EditOutcome::Submit(_) = session.stage_title("New") else {
            panic!("expected a submit");
        };
        let EditOutcome::Submit(description) = session.stage_album_description("Fresh") else {
            panic!("expected a submit");
        };
        assert_eq!(description.request.form_value("title"), Some("New"));
        assert_eq!(description.request.form_value("description"), Some("Fresh"));

        let EditOutcome::Submit(cover) = session.stage_cover("p2").unwrap() else {
            panic!("expected a submit");
        };
        assert_eq!(cover.request.form_value("title"), Some("New"));
        assert_eq!(cover.request.form_value("description"), Some("Fresh"));
        assert_eq!(cover.request.form_value("coverPhotoId"), Some("p2"));

        // Nothing is stored until a request succeeds
        assert_eq!(session.album().title, "A");
        assert_eq!(session.working_album().title, "New");
    }

    #[test]
    fn test_discarded_change_leaves_later_requests() {
        let mut session = session();
        let EditOutcome::Submit(title) = session.stage_title("New") else {
            panic!("expected a submit");
        };
        session.discard_album(&title.change);
        assert!(session.unconfirmed_album_changes().is_empty());

        let EditOutcome::Submit(description) = session.stage_album_description("Fresh") else {
            panic!("expected a submit");
        };
        assert_eq!(description.request.form_value("title"), Some("A"));
    }

    #[test]
    fn test_retyping_in_flight_title_is_unchanged() {
        let mut session = session();
        assert!(session.stage_title("New").request().is_some());
        assert_eq!(session.stage_title("New"), EditOutcome::Unchanged);
        assert_eq!(session.stage_title(""), EditOutcome::Revert("New".to_string()));
    }

    #[test]
    fn test_pending_delete_lifecycle() {
        let mut session = session();
        assert_eq!(
            session.request_delete_photo("p2").unwrap(),
            &PendingAction::DeletePhoto("p2".to_string())
        );
        session.cancel_pending();
        assert!(session.pending().is_none());

        session.request_delete_album();
        assert_eq!(session.take_pending(), Some(PendingAction::DeleteAlbum("a1".to_string())));
        assert!(session.take_pending().is_none());
    }
}
