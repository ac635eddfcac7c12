use crate::error::{LibraryError, Result};
use crate::model::{Book, BookId, Library};

pub fn run(library: &Library, id: &BookId) -> Result<Book> {
    library
        .get(id)
        .cloned()
        .ok_or_else(|| LibraryError::BookNotFound(id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_book_or_not_found() {
        let library = StoreFixture::new().with_books(1).library();
        assert_eq!(run(&library, &BookId::new("101")).unwrap().title, "Test Book 1");
        assert!(matches!(
            run(&library, &BookId::new("nope")),
            Err(LibraryError::BookNotFound(_))
        ));
    }
}
