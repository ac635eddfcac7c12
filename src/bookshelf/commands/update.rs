//! Field-level edits with a single keep-current policy for every front-end:
//!
//! - text fields: `None` or blank keeps the current value, anything else is trimmed
//!   and stored
//! - `year`: `None` keeps the current value, `Some(0)` is rejected
//! - `read`: `None` keeps the current value

use crate::commands::add::valid_year;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookId, BookUpdate, Library};

pub fn run(library: &mut Library, id: &BookId, update: &BookUpdate) -> Result<CmdResult> {
    // Validate before touching the record so a bad year leaves it unchanged.
    let year = update.year.map(valid_year).transpose()?;

    let Some(book) = library.get_mut(id) else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Book not found!")));
    };

    apply_text(&mut book.title, update.title.as_deref());
    apply_text(&mut book.author, update.author.as_deref());
    apply_text(&mut book.genre, update.genre.as_deref());
    apply_text(&mut book.content, update.content.as_deref());
    if let Some(year) = year {
        book.year = year;
    }
    if let Some(read) = update.read {
        book.read = read;
    }

    let updated = book.clone();
    Ok(CmdResult::default()
        .with_affected_books(vec![updated])
        .with_message(CmdMessage::success("Book updated successfully!")))
}

fn apply_text(field: &mut String, new_value: Option<&str>) {
    if let Some(value) = new_value.map(str::trim).filter(|v| !v.is_empty()) {
        *field = value.to_string();
    }
}
