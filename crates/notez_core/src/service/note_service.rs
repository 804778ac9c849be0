//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/update/get/list/delete/toggle APIs for notes.
//! - Enforce save-time business rules: non-empty title and the
//!   favorite-marker category override.
//!
//! # Invariants
//! - Every write path validates inputs before touching the repository.
//! - A title containing the favorite marker forces the category to
//!   `Favorite`, on create and on update, even when the caller supplied a
//!   different category.

use crate::model::note::{
    normalize_category, Note, NoteDraft, NoteId, NotePatch, FAVORITE_CATEGORY, FAVORITE_MARKER,
};
use crate::repo::note_repo::{NoteRepository, RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Save rejected because the title is empty after trimming.
    EmptyTitle,
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent note state: {details}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NoteNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one note and returns the persisted record.
    ///
    /// The title is trimmed before validation; the category falls back to
    /// the default when blank and is overridden by the favorite-marker
    /// rule.
    pub fn create(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Note, NoteServiceError> {
        let title = title.into().trim().to_string();
        let category = category.into();
        let draft = NoteDraft::new(
            title.clone(),
            content.into(),
            normalize_category(&title, &category),
        );
        draft
            .validate()
            .map_err(|_| NoteServiceError::EmptyTitle)?;

        let id = self.repo.insert(&draft)?;
        self.repo
            .get(id)?
            .ok_or(NoteServiceError::InconsistentState(
                "created note not found in read-back",
            ))
    }

    /// Applies a partial update and returns the persisted record.
    ///
    /// A patched title must be non-empty; when it carries the favorite
    /// marker the category is forced to `Favorite` even if the patch did
    /// not set one.
    pub fn update(&self, id: NoteId, patch: NotePatch) -> Result<Note, NoteServiceError> {
        let mut patch = patch;
        if let Some(title) = patch.title.take() {
            let trimmed = title.trim().to_string();
            if trimmed.is_empty() {
                return Err(NoteServiceError::EmptyTitle);
            }
            if trimmed.contains(FAVORITE_MARKER) {
                patch.category = Some(FAVORITE_CATEGORY.to_string());
            }
            patch.title = Some(trimmed);
        }
        if let Some(category) = patch.category.take() {
            patch.category = Some(normalize_category(
                patch.title.as_deref().unwrap_or_default(),
                &category,
            ));
        }

        self.repo.update(id, &patch)?;
        // An empty patch never reaches the repository's NotFound check, so
        // a missing row only shows up here as a read-back miss.
        self.repo.get(id)?.ok_or(NoteServiceError::NoteNotFound(id))
    }

    /// Gets one note by id; `None` when it does not exist.
    pub fn get(&self, id: NoteId) -> RepoResult<Option<Note>> {
        self.repo.get(id)
    }

    /// Returns all notes in storage order.
    pub fn list(&self) -> RepoResult<Vec<Note>> {
        self.repo.list()
    }

    /// Deletes one note.
    pub fn delete(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.delete(id)?;
        Ok(())
    }

    /// Flips the favorite flag.
    pub fn toggle_favorite(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.toggle_favorite(id)?;
        Ok(())
    }

    /// Flips the pinned flag.
    pub fn toggle_pinned(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.repo.toggle_pinned(id)?;
        Ok(())
    }
}
