use chrono::{DateTime, Local};

/// A single to-do item.
///
/// Tasks are created through [`crate::ops::store::TaskStore::add`] and are
/// never removed from the collection: deletion is modeled as marking the
/// task complete (soft delete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Display text, non-empty (enforced at the add operation).
    pub title: String,
    /// Whether the task is done. Soft delete sets this too.
    pub completed: bool,
    /// Starred in the UI; drives the Important filter.
    pub important: bool,
    /// Creation timestamp; the Today filter compares its calendar date.
    pub created_at: DateTime<Local>,
}

impl Task {
    /// Create a new open, unstarred task.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        created_at: DateTime<Local>,
    ) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            completed: false,
            important: false,
            created_at,
        }
    }
}
