use crate::commands::{CmdMessage, CmdResult};
use crate::model::Library;

/// Case-insensitive substring match on title and author, or exact id match.
///
/// A blank term matches nothing.
pub fn run(library: &Library, term: &str) -> CmdResult {
    let raw = term.trim();
    if raw.is_empty() {
        return CmdResult::default()
            .with_message(CmdMessage::warning("Please enter a search term!"));
    }

    let lowered = raw.to_lowercase();
    let matches: Vec<_> = library
        .iter()
        .filter(|b| b.matches_term(&lowered, raw))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning("No matching books found!"));
    }
    result.with_listed_books(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn library() -> Library {
        StoreFixture::new()
            .with_book("101", "Dune", "Frank Herbert", false)
            .with_book("102", "Dune Messiah", "Frank Herbert", true)
            .with_book("210", "Emma", "Jane Austen", false)
            .library()
    }

    #[test]
    fn matches_title_case_insensitively() {
        let result = run(&library(), "dUnE");
        let titles: Vec<_> = result.listed_books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Dune", "Dune Messiah"]);
    }

    #[test]
    fn matches_author_substring() {
        let result = run(&library(), "austen");
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].title, "Emma");
    }

    #[test]
    fn matches_exact_id_only() {
        assert_eq!(run(&library(), "210").listed_books.len(), 1);
        // Ids are not substring-matched
        assert!(run(&library(), "21").listed_books.is_empty());
    }

    #[test]
    fn blank_term_matches_nothing() {
        let result = run(&library(), "   ");
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn unmatched_term_reports_no_results() {
        let result = run(&library(), "tolkien");
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages[0].content, "No matching books found!");
    }
}
