//! Pending destructive actions
//!
//! A delete is recorded here before the confirm modal opens and taken back
//! out when the user confirms or cancels.

use crate::http::ApiRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingAction {
    DeleteAlbum(String),
    DeletePhoto(String),
}

/// Page transition after a successful delete
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AfterDelete {
    Navigate(String),
    Reload,
}

impl PendingAction {
    pub fn request(&self) -> ApiRequest {
        match self {
            PendingAction::DeleteAlbum(id) => ApiRequest::delete_album(id),
            PendingAction::DeletePhoto(id) => ApiRequest::delete_photo(id),
        }
    }

    pub fn after_success(&self, admin_path: &str) -> AfterDelete {
        match self {
            PendingAction::DeleteAlbum(_) => AfterDelete::Navigate(admin_path.to_string()),
            PendingAction::DeletePhoto(_) => AfterDelete::Reload,
        }
    }
}
