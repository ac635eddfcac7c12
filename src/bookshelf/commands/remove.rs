use crate::commands::{CmdMessage, CmdResult};
use crate::model::{BookId, Library};

pub fn run(library: &mut Library, id: &BookId) -> CmdResult {
    match library.take(id) {
        Some(book) => CmdResult::default()
            .with_affected_books(vec![book])
            .with_message(CmdMessage::success("Book removed successfully!")),
        None => CmdResult::default().with_message(CmdMessage::warning("Book not found!")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_existing_book() {
        let mut library = StoreFixture::new().with_books(3).library();
        let result = run(&mut library, &BookId::new("102"));

        assert!(result.changed());
        assert_eq!(result.affected_books[0].title, "Test Book 2");
        assert_eq!(library.len(), 2);
        assert!(!library.contains_id(&BookId::new("102")));
    }

    #[test]
    fn missing_id_is_benign() {
        let mut library = StoreFixture::new().with_books(2).library();
        let before = library.clone();
        let result = run(&mut library, &BookId::new("999"));

        assert!(!result.changed());
        assert_eq!(library, before);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[0].content, "Book not found!");
    }

    #[test]
    fn keeps_order_of_remaining_books() {
        let mut library = StoreFixture::new().with_books(4).library();
        run(&mut library, &BookId::new("101"));
        let titles: Vec<_> = library.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Test Book 2", "Test Book 3", "Test Book 4"]);
    }
}
