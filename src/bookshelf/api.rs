//! # API Facade
//!
//! The single entry point for every bookshelf operation, whatever the UI.
//!
//! Each method is one explicit **load → operate → save** cycle against the store the
//! API owns. Nothing is cached between calls, so two calls never share an in-memory
//! library and each action can be tested in isolation.
//!
//! Mutating methods save only when the command reports a change: removing or
//! updating an unknown id leaves the backing file untouched.
//!
//! Business logic lives in `commands/*.rs`; this layer only dispatches, converts
//! inputs (`&str` → [`BookId`]) and decides when to persist.

use crate::commands;
use crate::error::Result;
use crate::ids::DEFAULT_ID_LENGTH;
use crate::model::{Book, BookId, BookUpdate, Library, NewBook};
use crate::store::LibraryStore;

/// The main API facade, generic over the storage backend.
pub struct LibraryApi<S: LibraryStore> {
    store: S,
    paths: commands::ShelfPaths,
    id_length: usize,
}

impl<S: LibraryStore> LibraryApi<S> {
    pub fn new(store: S, paths: commands::ShelfPaths) -> Self {
        Self {
            store,
            paths,
            id_length: DEFAULT_ID_LENGTH,
        }
    }

    pub fn with_id_length(mut self, id_length: usize) -> Self {
        self.id_length = id_length;
        self
    }

    pub fn add_book(&mut self, fields: NewBook) -> Result<commands::CmdResult> {
        let mut library = self.store.load();
        let result = commands::add::run(&mut library, fields, self.id_length)?;
        self.store.save(&library)?;
        Ok(result)
    }

    pub fn remove_book(&mut self, id: impl Into<BookId>) -> Result<commands::CmdResult> {
        let mut library = self.store.load();
        let result = commands::remove::run(&mut library, &id.into());
        self.persist_if_changed(&library, &result)?;
        Ok(result)
    }

    pub fn update_book(
        &mut self,
        id: impl Into<BookId>,
        update: &BookUpdate,
    ) -> Result<commands::CmdResult> {
        let mut library = self.store.load();
        let result = commands::update::run(&mut library, &id.into(), update)?;
        self.persist_if_changed(&library, &result)?;
        Ok(result)
    }

    pub fn get_book(&self, id: impl Into<BookId>) -> Result<Book> {
        commands::get::run(&self.store.load(), &id.into())
    }

    pub fn search_books(&self, term: &str) -> Result<commands::CmdResult> {
        Ok(commands::search::run(&self.store.load(), term))
    }

    pub fn list_books(&self, filter: &BookFilter) -> Result<commands::CmdResult> {
        Ok(commands::list::run(&self.store.load(), filter))
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        Ok(commands::stats::run(&self.store.load()))
    }

    pub fn export_books<I: AsRef<str>>(
        &self,
        ids: &[I],
        options: &ExportOptions,
    ) -> Result<commands::CmdResult> {
        let ids: Vec<BookId> = ids.iter().map(|s| BookId::from(s.as_ref())).collect();
        commands::export::run(&self.store.load(), &ids, options)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Snapshot of the persisted library.
    pub fn library(&self) -> Library {
        self.store.load()
    }

    pub fn paths(&self) -> &commands::ShelfPaths {
        &self.paths
    }

    fn persist_if_changed(
        &mut self,
        library: &Library,
        result: &commands::CmdResult,
    ) -> Result<()> {
        if result.changed() {
            self.store.save(library)?;
        }
        Ok(())
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportOptions;
pub use crate::commands::list::{BookFilter, ReadFilter};
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, ShelfPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> LibraryApi<InMemoryStore> {
        let paths = ShelfPaths {
            data_dir: PathBuf::from("/tmp/unused"),
            library_file: PathBuf::from("/tmp/unused/library.json"),
        };
        LibraryApi::new(InMemoryStore::new(), paths)
    }

    fn dune() -> NewBook {
        NewBook::new("Dune", "Herbert", 1965, "SciFi", "...")
    }

    #[test]
    fn dune_lifecycle() {
        let mut api = api();

        let id = api.add_book(dune()).unwrap().affected_books[0].id.clone();
        assert_eq!(api.library().len(), 1);

        let found = api.search_books("dune").unwrap().listed_books;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, id);

        api.update_book(id.clone(), &BookUpdate::mark_read(true)).unwrap();
        let stats = api.statistics().unwrap().stats.unwrap();
        assert_eq!(stats.read, 1);
        assert!((stats.read_percentage - 100.0).abs() < f64::EPSILON);

        api.remove_book(id).unwrap();
        assert_eq!(api.statistics().unwrap().stats.unwrap().total, 0);
    }

    #[test]
    fn failed_validation_does_not_save() {
        let mut api = api();
        let mut fields = dune();
        fields.title = String::new();
        assert!(api.add_book(fields).is_err());
        assert_eq!(api.store.save_count(), 0);
    }

    #[test]
    fn not_found_does_not_save() {
        let mut api = api();
        api.add_book(dune()).unwrap();
        assert_eq!(api.store.save_count(), 1);

        api.remove_book("nope").unwrap();
        api.update_book("nope", &BookUpdate::mark_read(true)).unwrap();
        assert_eq!(api.store.save_count(), 1);
    }

    #[test]
    fn ids_are_trimmed() {
        let mut api = api();
        let id = api.add_book(dune()).unwrap().affected_books[0].id.clone();
        let padded = format!("  {} ", id);
        assert_eq!(api.get_book(padded.as_str()).unwrap().id, id);
    }

    #[test]
    fn respects_configured_id_length() {
        let mut api = api().with_id_length(6);
        let id = api.add_book(dune()).unwrap().affected_books[0].id.clone();
        assert_eq!(id.as_str().len(), 6);
    }
}
