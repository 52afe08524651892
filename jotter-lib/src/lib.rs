//! Core library for Jotter.
//!
//! Holds the note model, the draft validation rules shared by every front end, the
//! [`Notebook`] that owns the note collection and mirrors it to a key-value [`Storage`],
//! and the on-disk configuration.

use thiserror::Error;

pub mod config;
pub mod draft;
pub mod fs;
pub mod notes;
pub mod storage;

pub use draft::Draft;
pub use notes::{Note, NoteId, NoteStatus, Notebook, StatusFilter};
pub use storage::{FileStorage, MemoryStorage, Storage};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not locate the home directory")]
    NoHome,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to (de)serialize notes: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse configuration: {0}")]
    ConfigRead(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("Note content must be between {min} and {max} characters (got {count})")]
    ContentLength { count: usize, min: u16, max: u16 },
    #[error("No note with id {0}")]
    NotFound(NoteId),
}
