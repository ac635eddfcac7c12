use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Book, Library};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    All,
    Read,
    Unread,
}

#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub read: ReadFilter,
    /// Case-insensitive exact genre match
    pub genre: Option<String>,
}

impl BookFilter {
    fn accepts(&self, book: &Book) -> bool {
        let read_ok = match self.read {
            ReadFilter::All => true,
            ReadFilter::Read => book.read,
            ReadFilter::Unread => !book.read,
        };
        let genre_ok = match self.genre.as_deref().map(str::trim) {
            Some(genre) if !genre.is_empty() => book.genre.eq_ignore_ascii_case(genre),
            _ => true,
        };
        read_ok && genre_ok
    }
}

pub fn run(library: &Library, filter: &BookFilter) -> CmdResult {
    if library.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("Your library is empty!"));
    }

    let books: Vec<_> = library.iter().filter(|b| filter.accepts(b)).cloned().collect();
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books match the filter."));
    }
    result.with_listed_books(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn library() -> Library {
        StoreFixture::new()
            .with_book("1", "A", "X", true)
            .with_book("2", "B", "Y", false)
            .with_book("3", "C", "Z", true)
            .library()
    }

    #[test]
    fn lists_all_in_insertion_order() {
        let result = run(&library(), &BookFilter::default());
        let ids: Vec<_> = result.listed_books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_by_read_status() {
        let read = BookFilter {
            read: ReadFilter::Read,
            ..BookFilter::default()
        };
        assert_eq!(run(&library(), &read).listed_books.len(), 2);

        let unread = BookFilter {
            read: ReadFilter::Unread,
            ..BookFilter::default()
        };
        assert_eq!(run(&library(), &unread).listed_books[0].id.as_str(), "2");
    }

    #[test]
    fn filters_by_genre_ignoring_case() {
        let filter = BookFilter {
            genre: Some("fiction".into()),
            ..BookFilter::default()
        };
        assert_eq!(run(&library(), &filter).listed_books.len(), 3);

        let filter = BookFilter {
            genre: Some("Poetry".into()),
            ..BookFilter::default()
        };
        let result = run(&library(), &filter);
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn empty_library_says_so() {
        let result = run(&Library::new(), &BookFilter::default());
        assert_eq!(result.messages[0].content, "Your library is empty!");
    }
}
