//! In-memory book store
//!
//! Records are kept in insertion order and located by linear scan on id.
//! All access goes through `BookStore` methods; the backing vector is never
//! handed out by mutable reference.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::book::Book;
use super::errors::{StorageError, StorageResult};

/// Ordered collection of books
#[derive(Debug, Default)]
pub struct BookStore {
    books: Vec<Book>,
}

impl BookStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Creates a store seeded from a JSON file
    pub fn from_file(path: &Path) -> StorageResult<Self> {
        let mut store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    /// Replaces the collection with the JSON array stored at `path`.
    ///
    /// On any error the current contents are left as they were.
    pub fn load(&mut self, path: &Path) -> StorageResult<()> {
        let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_str(&content)?;
        info!(path = %path.display(), count = self.books.len(), "loaded book data");
        Ok(())
    }

    /// Replaces the collection with the books parsed from `content`.
    pub fn load_str(&mut self, content: &str) -> StorageResult<()> {
        let books: Vec<Book> = serde_json::from_str(content)?;

        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            if !seen.insert(book.id.as_str()) {
                return Err(StorageError::Parse(format!("duplicate id '{}'", book.id)));
            }
        }

        self.books = books;
        Ok(())
    }

    /// All books in insertion order
    pub fn get_all(&self) -> &[Book] {
        &self.books
    }

    /// Finds the first book with the given id
    pub fn get_by_id(&self, id: &str) -> StorageResult<&Book> {
        self.position(id)
            .map(|index| &self.books[index])
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    /// Appends a book.
    ///
    /// Rejects a book whose id is already present.
    pub fn add(&mut self, book: Book) -> StorageResult<()> {
        if self.position(&book.id).is_some() {
            return Err(StorageError::DuplicateId(book.id));
        }
        debug!(id = %book.id, "adding book");
        self.books.push(book);
        Ok(())
    }

    /// Replaces the book with the given id, keeping its position.
    ///
    /// The stored id stays `id` whatever `book.id` holds.
    pub fn update_by_id(&mut self, id: &str, mut book: Book) -> StorageResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        book.id = id.to_string();
        debug!(id, "updating book");
        self.books[index] = book;
        Ok(())
    }

    /// Removes the book with the given id; later books shift down.
    pub fn delete_by_id(&mut self, id: &str) -> StorageResult<Book> {
        let index = self
            .position(id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        debug!(id, "deleting book");
        Ok(self.books.remove(index))
    }

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // Linear scan; the only lookup path.
    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}
