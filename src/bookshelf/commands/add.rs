use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::ids::generate_id;
use crate::model::{Book, Library, NewBook};

pub fn run(library: &mut Library, fields: NewBook, id_length: usize) -> Result<CmdResult> {
    let title = required("title", &fields.title)?;
    let author = required("author", &fields.author)?;
    let year = valid_year(fields.year)?;
    let genre = required("genre", &fields.genre)?;
    let content = required("content", &fields.content)?;

    let book = Book {
        id: generate_id(library, id_length),
        title,
        author,
        year,
        genre,
        content,
        read: fields.read,
    };

    let message = format!("Book added successfully! ID: {}", book.id);
    library.push(book.clone());

    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(CmdMessage::success(message)))
}

pub(super) fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LibraryError::Validation(format!(
            "The {} field cannot be blank.",
            field
        )));
    }
    Ok(trimmed.to_string())
}

pub(super) fn valid_year(year: u32) -> Result<u32> {
    if year == 0 {
        return Err(LibraryError::Validation(
            "Publication year must be a positive number.".to_string(),
        ));
    }
    Ok(year)
}
