//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record plus draft/patch input shapes.
//! - Provide the favorite-marker category rule as a domain function so it
//!   is testable without any presentation code.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never changes.
//! - A title containing [`FAVORITE_MARKER`] always maps to the
//!   [`FAVORITE_CATEGORY`] category at save time.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a note (SQLite rowid).
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Category applied when the caller supplies none.
pub const DEFAULT_CATEGORY: &str = "General";

/// Category forced onto notes whose title carries the favorite marker.
pub const FAVORITE_CATEGORY: &str = "Favorite";

/// Glyph that, when present in a title, forces the favorite category.
pub const FAVORITE_MARKER: char = '⭐';

/// Categories offered by the presentation layer; storage accepts any string.
pub const SUGGESTED_CATEGORIES: [&str; 4] = ["All", "Work", "Ideas", FAVORITE_CATEGORY];

/// Canonical persisted note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable storage-assigned id.
    pub id: NoteId,
    pub title: String,
    /// Free-form body, may be empty.
    pub content: String,
    pub favorite: bool,
    /// Open-ended label; see [`SUGGESTED_CATEGORIES`] for the UI set.
    pub category: String,
    pub is_pinned: bool,
    /// Unix epoch milliseconds, set once at insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on title/content/category
    /// updates but not on favorite/pin toggles.
    pub updated_at: i64,
}

/// Input shape for creating a note.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl NoteDraft {
    /// Builds a draft, falling back to [`DEFAULT_CATEGORY`] when the
    /// category is blank.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let category = category.into();
        Self {
            title: title.into(),
            content: content.into(),
            category: if category.trim().is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category
            },
        }
    }

    /// Rejects drafts whose title is empty after trimming.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.title.trim().is_empty() {
            return Err(NoteValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Partial-update shape: only `Some` fields are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

impl NotePatch {
    /// Returns whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.category.is_none()
    }
}

/// Validation failures for note inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    EmptyTitle,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// Applies the favorite-marker rule: a title carrying the marker glyph
/// forces the note into the favorite category regardless of what the
/// caller picked.
pub fn normalize_category(title: &str, category: &str) -> String {
    if title.contains(FAVORITE_MARKER) {
        FAVORITE_CATEGORY.to_string()
    } else if category.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_category, NoteDraft, NotePatch, NoteValidationError, DEFAULT_CATEGORY,
        FAVORITE_CATEGORY,
    };

    #[test]
    fn draft_defaults_blank_category() {
        let draft = NoteDraft::new("Groceries", "Milk, eggs", "  ");
        assert_eq!(draft.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn draft_rejects_whitespace_title() {
        let draft = NoteDraft::new("   ", "body", "Work");
        assert_eq!(draft.validate(), Err(NoteValidationError::EmptyTitle));
    }

    #[test]
    fn marker_in_title_forces_favorite_category() {
        assert_eq!(normalize_category("Idea ⭐", "Ideas"), FAVORITE_CATEGORY);
        assert_eq!(normalize_category("Idea", "Ideas"), "Ideas");
        assert_eq!(normalize_category("Idea", ""), DEFAULT_CATEGORY);
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(NotePatch::default().is_empty());
        let patch = NotePatch {
            title: Some("X".to_string()),
            ..NotePatch::default()
        };
        assert!(!patch.is_empty());
    }
}
