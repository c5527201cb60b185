//! Inline album editor
//!
//! Pure edit logic for the album edit page. The session stages a change and
//! the request that persists it; the record is only committed once the
//! server accepts the request. DOM wiring lives in
//! [`crate::dom::editor_bindings`].

pub mod field;
pub mod pending;
pub mod session;

pub use field::{diff_field, ClearPolicy, FieldChange};
pub use pending::{AfterDelete, PendingAction};
pub use session::{AlbumChange, AlbumSession, EditOutcome, PhotoChange, StagedUpdate};
