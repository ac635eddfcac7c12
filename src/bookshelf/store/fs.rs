use super::LibraryStore;
use crate::error::{LibraryError, Result};
use crate::model::{Book, Library};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LibraryError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "library.json".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl LibraryStore for FileStore {
    fn load(&self) -> Library {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no library file, starting empty");
                return Library::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not read library file"
                );
                return Library::new();
            }
        };

        if content.trim().is_empty() {
            return Library::new();
        }

        let books: Vec<Book> = match serde_json::from_str(&content) {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "malformed library file, treating as empty"
                );
                return Library::new();
            }
        };

        let (library, dropped) = Library::from_books(books);
        if dropped > 0 {
            tracing::warn!(
                dropped,
                "library file contained duplicate ids, kept first occurrences"
            );
        }
        tracing::debug!(path = %self.path.display(), books = library.len(), "loaded library");
        library
    }

    fn save(&mut self, library: &Library) -> Result<()> {
        self.ensure_parent()?;
        let content = to_pretty_json(library)?;

        // Write-then-rename so an interrupted write leaves the old file intact.
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(LibraryError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(LibraryError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), books = library.len(), "saved library");
        Ok(())
    }
}

/// Serialize with 4-space indentation, matching existing library files.
fn to_pretty_json(library: &Library) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(library, &mut ser).map_err(LibraryError::Serialization)?;
    Ok(buf)
}
