//! # Storage Layer
//!
//! The [`LibraryStore`] trait is the only persistence seam. The whole collection is
//! read and written as one unit: there are no per-record writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one pretty-printed JSON array on disk
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── library.json    # every book, in insertion order
//! └── config.json     # ShelfConfig
//! ```
//!
//! `load` never fails: a missing or unreadable file is an empty library. `save`
//! replaces the previous contents entirely.

use crate::error::Result;
use crate::model::Library;

pub mod fs;
pub mod memory;

pub trait LibraryStore {
    /// Load the persisted library, or an empty one if nothing usable is stored.
    fn load(&self) -> Library;

    /// Replace the persisted library with `library`.
    fn save(&mut self, library: &Library) -> Result<()>;
}
