//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the note CRUD and flag-toggle operations over one `notes`
//!   table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `updated_at` is refreshed by field updates only; favorite/pin toggles
//!   leave it untouched.
//! - Mutations targeting a missing id surface `RepoError::NotFound` instead
//!   of succeeding silently.
//! - Listing preserves storage (rowid) order; view shaping is the caller's
//!   job.

use crate::db::DbError;
use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    content,
    favorite,
    category,
    is_pinned,
    created_at,
    updated_at
FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note storage operations.
pub trait NoteRepository {
    /// Creates one note and returns its storage-assigned id.
    fn insert(&self, draft: &NoteDraft) -> RepoResult<NoteId>;
    /// Writes only the fields present in the patch and refreshes
    /// `updated_at`. An empty patch is a no-op.
    fn update(&self, id: NoteId, patch: &NotePatch) -> RepoResult<()>;
    /// Removes the row.
    fn delete(&self, id: NoteId) -> RepoResult<()>;
    /// Gets one note by id; `None` when the row does not exist.
    fn get(&self, id: NoteId) -> RepoResult<Option<Note>>;
    /// Returns all notes in storage order.
    fn list(&self) -> RepoResult<Vec<Note>>;
    /// Flips the favorite flag in place.
    fn toggle_favorite(&self, id: NoteId) -> RepoResult<()>;
    /// Flips the pinned flag in place.
    fn toggle_pinned(&self, id: NoteId) -> RepoResult<()>;
}

/// SQLite-backed note repository over a migrated connection.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert(&self, draft: &NoteDraft) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (title, content, category, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4);",
            params![
                draft.title.as_str(),
                draft.content.as_str(),
                draft.category.as_str(),
                now_epoch_ms(self.conn)?,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, id: NoteId, patch: &NotePatch) -> RepoResult<()> {
        if patch.is_empty() {
            return Ok(());
        }

        let mut assignments: Vec<&'static str> = Vec::new();
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(title) = patch.title.as_ref() {
            assignments.push("title = ?");
            bind_values.push(Value::Text(title.clone()));
        }
        if let Some(content) = patch.content.as_ref() {
            assignments.push("content = ?");
            bind_values.push(Value::Text(content.clone()));
        }
        if let Some(category) = patch.category.as_ref() {
            assignments.push("category = ?");
            bind_values.push(Value::Text(category.clone()));
        }

        assignments.push("updated_at = ?");
        bind_values.push(Value::Integer(now_epoch_ms(self.conn)?));
        bind_values.push(Value::Integer(id));

        let sql = format!(
            "UPDATE notes SET {} WHERE id = ?;",
            assignments.join(", ")
        );
        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: NoteId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", params![id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }

    fn get(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(note_from_row(row)?));
        }

        Ok(None)
    }

    fn list(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!("{NOTE_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;

        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(note_from_row(row)?);
        }

        Ok(notes)
    }

    fn toggle_favorite(&self, id: NoteId) -> RepoResult<()> {
        self.toggle_flag("favorite", id)
    }

    fn toggle_pinned(&self, id: NoteId) -> RepoResult<()> {
        self.toggle_flag("is_pinned", id)
    }
}

impl SqliteNoteRepository<'_> {
    /// Flips one boolean column in place. `column` must be a flag column
    /// name known at compile time.
    fn toggle_flag(&self, column: &'static str, id: NoteId) -> RepoResult<()> {
        let changed = self.conn.execute(
            &format!("UPDATE notes SET {column} = NOT {column} WHERE id = ?1;"),
            params![id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

fn note_from_row(row: &Row<'_>) -> RepoResult<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        favorite: int_to_bool(row.get("favorite")?),
        category: row.get("category")?,
        is_pinned: int_to_bool(row.get("is_pinned")?),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn int_to_bool(value: i64) -> bool {
    value != 0
}

fn now_epoch_ms(conn: &Connection) -> RepoResult<i64> {
    // Timestamps come from SQLite itself so file and in-memory stores agree
    // on the clock source.
    let now: i64 = conn.query_row(
        "SELECT CAST(strftime('%s', 'now') AS INTEGER) * 1000
            + CAST(strftime('%f', 'now') * 1000 AS INTEGER) % 1000;",
        [],
        |row| row.get(0),
    )?;
    Ok(now)
}
