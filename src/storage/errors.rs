//! Storage error types
//!
//! Error codes:
//! - BOOKSHELF_STORAGE_READ_ERROR
//! - BOOKSHELF_STORAGE_PARSE_ERROR
//! - BOOKSHELF_BOOK_NOT_FOUND
//! - BOOKSHELF_DUPLICATE_ID

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for record store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Bulk-load source could not be read
    #[error("unable to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bulk-load content is not a valid book array
    #[error("unable to parse book data: {0}")]
    Parse(String),

    /// No record carries the requested id
    #[error("book not found: {0}")]
    NotFound(String),

    /// A record with this id is already stored
    #[error("book already exists: {0}")]
    DuplicateId(String),
}

impl StorageError {
    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Read { .. } => "BOOKSHELF_STORAGE_READ_ERROR",
            StorageError::Parse(_) => "BOOKSHELF_STORAGE_PARSE_ERROR",
            StorageError::NotFound(_) => "BOOKSHELF_BOOK_NOT_FOUND",
            StorageError::DuplicateId(_) => "BOOKSHELF_DUPLICATE_ID",
        }
    }

    /// Whether this error is a missing-record error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StorageError::NotFound("x".into()).code(),
            "BOOKSHELF_BOOK_NOT_FOUND"
        );
        assert_eq!(
            StorageError::Parse("bad".into()).code(),
            "BOOKSHELF_STORAGE_PARSE_ERROR"
        );
        assert_eq!(
            StorageError::DuplicateId("1".into()).code(),
            "BOOKSHELF_DUPLICATE_ID"
        );
    }

    #[test]
    fn test_read_error_display_includes_path() {
        let err = StorageError::Read {
            path: PathBuf::from("/missing/books.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/books.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_json_error_becomes_parse() {
        let json_err = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err = StorageError::from(json_err);
        assert!(matches!(err, StorageError::Parse(_)));
        assert!(!err.is_not_found());
    }
}
