//! Plain-text export of book content.
//!
//! Each selected book becomes `<title>.txt` holding its content. With
//! [`ExportOptions::archive`] the files are bundled into one
//! `shelf-<timestamp>.tar.gz` instead. With [`ExportOptions::plain`] the Markdown
//! body is flattened to plain text first.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{LibraryError, Result};
use crate::model::{Book, BookId, Library};
use chrono::Local;
use flate2::write::GzEncoder;
use flate2::Compression;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub plain: bool,
    pub archive: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            plain: false,
            archive: false,
        }
    }
}

pub fn run(library: &Library, ids: &[BookId], options: &ExportOptions) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let books = select_books(library, ids, &mut result);

    if books.is_empty() {
        result.add_message(CmdMessage::info("No books to export."));
        return Ok(result);
    }

    if !options.out_dir.exists() {
        fs::create_dir_all(&options.out_dir).map_err(LibraryError::Io)?;
    }

    let entries = export_entries(&books, options.plain);

    if options.archive {
        let filename = format!("shelf-{}.tar.gz", Local::now().format("%Y-%m-%d_%H-%M-%S"));
        let path = options.out_dir.join(filename);
        let file = File::create(&path).map_err(LibraryError::Io)?;
        write_archive(file, &entries)?;
        result.add_message(CmdMessage::success(format!(
            "Exported {} book(s) to {}",
            entries.len(),
            path.display()
        )));
        result.exported_paths.push(path);
    } else {
        for (name, body) in &entries {
            let path = options.out_dir.join(name);
            fs::write(&path, body).map_err(LibraryError::Io)?;
            result.add_message(CmdMessage::success(format!("Exported {}", path.display())));
            result.exported_paths.push(path);
        }
    }

    Ok(result)
}

fn select_books<'a>(library: &'a Library, ids: &[BookId], result: &mut CmdResult) -> Vec<&'a Book> {
    if ids.is_empty() {
        return library.iter().collect();
    }

    ids.iter()
        .filter_map(|id| {
            let book = library.get(id);
            if book.is_none() {
                result.add_message(CmdMessage::warning(format!("Book not found: {}", id)));
            }
            book
        })
        .collect()
}

/// File name and body for each book. Repeated titles get the id appended.
fn export_entries(books: &[&Book], plain: bool) -> Vec<(String, String)> {
    let mut used = HashSet::new();
    books
        .iter()
        .map(|book| {
            let base = sanitize_filename(&book.title);
            let mut name = format!("{}.txt", base);
            if !used.insert(name.clone()) {
                name = format!("{}-{}.txt", base, book.id);
                used.insert(name.clone());
            }
            let body = if plain {
                markdown_to_plain(&book.content)
            } else {
                book.content.clone()
            };
            (name, body)
        })
        .collect()
}

fn write_archive<W: Write>(writer: W, entries: &[(String, String)]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for (name, body) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(body.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, Path::new("shelf").join(name), body.as_bytes())
            .map_err(LibraryError::Io)?;
    }

    tar.into_inner()
        .and_then(|enc| enc.finish())
        .map_err(LibraryError::Io)?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    let cleaned = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string();

    if cleaned.is_empty() {
        "book".to_string()
    } else {
        cleaned
    }
}

/// Flatten Markdown to readable plain text: markup is dropped, block structure kept.
pub fn markdown_to_plain(content: &str) -> String {
    let mut out = String::new();

    for event in Parser::new_ext(content, Options::all()) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => out.push_str("---\n\n"),
            Event::Start(Tag::Item) => out.push_str("- "),
            Event::End(TagEnd::Item) => out.push('\n'),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock) => {
                out.push_str("\n\n")
            }
            Event::End(TagEnd::List(_)) => out.push('\n'),
            _ => {}
        }
    }

    let trimmed = out.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{}\n", trimmed)
    }
}
