//! Core domain logic for NotEz.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod listing;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use listing::{badge, filter_category, filter_query, partition_pinned, ALL_CATEGORIES};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    normalize_category, Note, NoteDraft, NoteId, NotePatch, NoteValidationError, DEFAULT_CATEGORY,
    FAVORITE_CATEGORY, FAVORITE_MARKER, SUGGESTED_CATEGORIES,
};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::note_service::{NoteService, NoteServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
