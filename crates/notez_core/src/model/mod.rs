//! Domain model for the notes store.
//!
//! # Responsibility
//! - Define the canonical note record and its input shapes.
//! - Own note-level business rules (title validation, favorite marker).
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned by storage.
//! - `favorite` and `is_pinned` are independent flags.

pub mod note;
