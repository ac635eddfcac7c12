use super::LibraryStore;
use crate::error::Result;
use crate::model::Library;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    library: Library,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(library: Library) -> Self {
        Self { library, saves: 0 }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl LibraryStore for InMemoryStore {
    fn load(&self) -> Library {
        self.library.clone()
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.library = library.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookId};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let n = i + 1;
                self.push(Book {
                    id: BookId::new(format!("{}", 100 + n)),
                    title: format!("Test Book {}", n),
                    author: format!("Author {}", n),
                    year: 1900 + n as u32,
                    genre: "Fiction".into(),
                    content: format!("Content for book {}", n),
                    read: false,
                });
            }
            self
        }

        pub fn with_book(mut self, id: &str, title: &str, author: &str, read: bool) -> Self {
            self.push(Book {
                id: BookId::new(id),
                title: title.into(),
                author: author.into(),
                year: 2001,
                genre: "Fiction".into(),
                content: "Some content".into(),
                read,
            });
            self
        }

        pub fn library(&self) -> Library {
            self.store.load()
        }

        fn push(&mut self, book: Book) {
            let mut library = self.store.load();
            library.push(book);
            self.store.library = library;
        }
    }
}
