//! Note-taking CLI entry point.
//!
//! Thin presentation layer over `notez_core`: every subcommand maps to one
//! storage operation, plus the in-memory list shaping (pinned-first order,
//! search and category filters) applied to the fetched snapshot.

mod app;

use app::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use log::{info, warn};
use notez_core::db::open_db;
use notez_core::{
    badge, filter_category, filter_query, partition_pinned, Note, NotePatch, NoteService,
    SqliteNoteRepository, ALL_CATEGORIES, SUGGESTED_CATEGORIES,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let data_dir = resolve_data_dir(cli.db.as_deref())?;
    init_logging(&data_dir, cli.log_level.as_deref());

    let db_path = cli.db.unwrap_or_else(|| data_dir.join("notes.db"));
    let conn = open_db(&db_path)?;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));

    match cli.command {
        Commands::Add {
            title,
            content,
            category,
        } => {
            let note = service.create(title, content, category)?;
            info!(
                "event=note_created module=cli status=ok id={} category={}",
                note.id, note.category
            );
            println!("created note {}: {}", note.id, note.title);
        }
        Commands::List { query, category } => {
            let notes = service.list()?;
            let notes = filter_category(
                &notes,
                category.as_deref().unwrap_or(ALL_CATEGORIES),
            );
            let notes = filter_query(&notes, query.as_deref().unwrap_or(""));
            let notes = partition_pinned(notes);
            if notes.is_empty() {
                println!("no notes");
            }
            for note in &notes {
                println!("{}", render_line(note));
            }
        }
        Commands::Show { id } => match service.get(id)? {
            Some(note) => {
                println!("{}: {} {}", note.id, note.title, badge(&note));
                println!("category: {}", note.category);
                if !note.content.is_empty() {
                    println!("{}", note.content);
                }
            }
            None => return Err(format!("note not found: {id}").into()),
        },
        Commands::Edit {
            id,
            title,
            content,
            category,
        } => {
            let note = service.update(
                id,
                NotePatch {
                    title,
                    content,
                    category,
                },
            )?;
            println!("updated note {}: {}", note.id, note.title);
        }
        Commands::Rm { id } => {
            service.delete(id)?;
            println!("deleted note {id}");
        }
        Commands::Fav { id } => {
            service.toggle_favorite(id)?;
            println!("toggled favorite on note {id}");
        }
        Commands::Pin { id } => {
            service.toggle_pinned(id)?;
            println!("toggled pin on note {id}");
        }
        Commands::Categories => {
            for category in SUGGESTED_CATEGORIES {
                println!("{category}");
            }
        }
    }

    Ok(())
}

/// Picks the platform data directory unless the user supplied an explicit
/// database path, in which case its parent directory is used.
fn resolve_data_dir(db_override: Option<&std::path::Path>) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = db_override {
        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        // Logging wants an absolute directory.
        let parent = if parent.is_absolute() {
            parent
        } else {
            std::env::current_dir()?.join(parent)
        };
        return Ok(parent);
    }

    let dirs = ProjectDirs::from("", "", "notez")
        .ok_or("could not determine a platform data directory")?;
    let data_dir = dirs.data_dir().to_path_buf();
    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir)
}

/// Best-effort logging setup; a failure must not block note operations.
fn init_logging(data_dir: &std::path::Path, level: Option<&str>) {
    let log_dir = data_dir.join("logs");
    let level = level.unwrap_or(notez_core::default_log_level());
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = notez_core::init_logging(level, dir) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        None => warn!("event=logging_skipped module=cli status=warn reason=non_utf8_dir"),
    }
}

fn render_line(note: &Note) -> String {
    let badge = badge(note);
    if badge.is_empty() {
        format!("{}: {}", note.id, note.title)
    } else {
        format!("{}: {} {}", note.id, note.title, badge)
    }
}
