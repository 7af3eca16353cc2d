use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::model::book::Book;
use crate::domain::repository::BookRepository;

#[derive(Debug, thiserror::Error)]
pub enum JsonStoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode book list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// BookRepository backed by one JSON file holding an array of records.
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> JsonStoreError {
        JsonStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookRepository for JsonBookRepository {
    type Error = JsonStoreError;

    fn load(&self) -> Result<Option<Vec<Book>>, Self::Error> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        // a zero-byte file counts as an empty collection
        if content.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }
        let books = serde_json::from_str(&content).map_err(|source| JsonStoreError::Decode {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(books))
    }

    /// Writes to a sibling temp file and renames it into place, so readers
    /// never observe a half-written document.
    fn save(&self, books: &[Book]) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = serde_json::to_string_pretty(books).map_err(JsonStoreError::Encode)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, &content).map_err(|e| self.io_error(e))?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(self.io_error(e));
        }
        Ok(())
    }
}
