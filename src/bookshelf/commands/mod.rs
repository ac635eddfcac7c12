//! # Command Layer
//!
//! One module per operation. Commands take the already-loaded [`Library`] and return
//! a [`CmdResult`]; they never load, save, or print. The API facade owns the
//! load → run → save cycle.
//!
//! Benign outcomes such as "not found" or "no matches" are reported as
//! [`CmdMessage`]s, not errors. Errors are reserved for invalid input and I/O.

use crate::config::ShelfConfig;
use crate::model::{Book, LibraryStats};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod export;
pub mod get;
pub mod list;
pub mod remove;
pub mod search;
pub mod stats;
pub mod update;

#[derive(Debug, Clone)]
pub struct ShelfPaths {
    pub data_dir: PathBuf,
    pub library_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Books created, changed, or removed by the command
    pub affected_books: Vec<Book>,
    /// Books to display
    pub listed_books: Vec<Book>,
    pub stats: Option<LibraryStats>,
    pub exported_paths: Vec<PathBuf>,
    pub config: Option<ShelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_stats(mut self, stats: LibraryStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: ShelfConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when a mutating command actually changed the library.
    pub fn changed(&self) -> bool {
        !self.affected_books.is_empty()
    }
}
