//! Field change detection
//!
//! Decides what a blur on an editable field means: nothing, a revert, or
//! an update to send.

/// What clearing a field does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearPolicy {
    /// The field may not be empty; restore the old value (album title)
    Revert,
    /// Clearing unsets the value (descriptions)
    Unset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldChange {
    Unchanged,
    /// Put the old value back into the DOM, send nothing
    Revert(String),
    /// New value to store; `None` is the unset marker
    Update(Option<String>),
}

/// Compare a field's new text against its current value
pub fn diff_field(current: Option<&str>, new_value: &str, policy: ClearPolicy) -> FieldChange {
    let current = current.map(str::trim).filter(|v| !v.is_empty());
    let new_value = new_value.trim();

    match (current, new_value.is_empty()) {
        (None, true) => FieldChange::Unchanged,
        (Some(old), false) if old == new_value => FieldChange::Unchanged,
        (Some(old), true) => match policy {
            ClearPolicy::Revert => FieldChange::Revert(old.to_string()),
            ClearPolicy::Unset => FieldChange::Update(None),
        },
        (_, false) => FieldChange::Update(Some(new_value.to_string())),
    }
}
