use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Short, human-typable identifier of a book (e.g. `"417"`).
///
/// Serialized as a plain JSON string so library files stay readable and
/// compatible with hand-edited data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<String> for BookId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String,
    pub content: String,
    #[serde(default)]
    pub read: bool,
}

impl Book {
    pub fn matches_term(&self, lowered_term: &str, raw_term: &str) -> bool {
        self.title.to_lowercase().contains(lowered_term)
            || self.author.to_lowercase().contains(lowered_term)
            || self.id.as_str() == raw_term
    }
}

/// Fields supplied when adding a book. Validated by `commands::add`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String,
    pub content: String,
    pub read: bool,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: u32,
        genre: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            content: content.into(),
            read: false,
        }
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }
}

/// A partial edit of a book.
///
/// `None` and blank text both keep the current value. See `commands::update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<u32>,
    pub genre: Option<String>,
    pub content: Option<String>,
    pub read: Option<bool>,
}

impl BookUpdate {
    pub fn mark_read(read: bool) -> Self {
        Self {
            read: Some(read),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.year.is_none()
            && self.genre.is_none()
            && self.content.is_none()
            && self.read.is_none()
    }
}

/// The whole collection, in insertion order. Persisted as a JSON array.
///
/// Deserializing goes through [`Library::from_books`], so ids stay unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Book>", into = "Vec<Book>")]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a library, keeping the first record for each id.
    ///
    /// Returns the library and the number of dropped duplicates.
    pub fn from_books(books: Vec<Book>) -> (Self, usize) {
        let mut seen = HashSet::new();
        let total = books.len();
        let books: Vec<Book> = books
            .into_iter()
            .filter(|b| seen.insert(b.id.clone()))
            .collect();
        let dropped = total - books.len();
        (Self { books }, dropped)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn contains_id(&self, id: &BookId) -> bool {
        self.books.iter().any(|b| &b.id == id)
    }

    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    pub fn get_mut(&mut self, id: &BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| &b.id == id)
    }

    pub(crate) fn push(&mut self, book: Book) {
        debug_assert!(!self.contains_id(&book.id));
        self.books.push(book);
    }

    pub(crate) fn take(&mut self, id: &BookId) -> Option<Book> {
        let pos = self.books.iter().position(|b| &b.id == id)?;
        Some(self.books.remove(pos))
    }
}

impl From<Vec<Book>> for Library {
    fn from(books: Vec<Book>) -> Self {
        Self::from_books(books).0
    }
}

impl From<Library> for Vec<Book> {
    fn from(library: Library) -> Self {
        library.books
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    pub read_percentage: f64,
}
