//! Command-line argument surface for the notes application.

use clap::{Parser, Subcommand};
use notez_core::NoteId;
use std::path::PathBuf;

/// Single-user note-taking application over a local SQLite store.
#[derive(Parser)]
#[command(name = "notez", version, about = "Create, list, search and flag short notes")]
pub struct Cli {
    /// Path to the notes database (defaults to the platform data directory)
    #[arg(long, value_parser)]
    pub db: Option<PathBuf>,

    /// Log level override (trace|debug|info|warn|error)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    Add {
        title: String,
        /// Note body
        #[arg(long, default_value = "")]
        content: String,
        /// Category label; a ⭐ in the title overrides this with Favorite
        #[arg(long, default_value = "")]
        category: String,
    },
    /// List notes, pinned first, with optional filters
    List {
        /// Case-insensitive substring match over title and content
        #[arg(long)]
        query: Option<String>,
        /// Keep only one category; `All` keeps everything
        #[arg(long)]
        category: Option<String>,
    },
    /// Print one note in full
    Show { id: NoteId },
    /// Update fields of an existing note
    Edit {
        id: NoteId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Delete a note
    Rm { id: NoteId },
    /// Toggle the favorite flag
    Fav { id: NoteId },
    /// Toggle the pinned flag
    Pin { id: NoteId },
    /// Print the suggested category labels
    Categories,
}
