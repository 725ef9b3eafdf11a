//! Book record types
//!
//! `Book` is the stored record. `NewBook` and `BookPatch` are the request
//! bodies for creation and partial update.

use serde::{Deserialize, Serialize};

/// A catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Assigned once at creation, never changed by updates
    pub id: String,
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Free-form date label
    #[serde(default)]
    pub published: String,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        published: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            published: published.into(),
        }
    }

    /// Overlay every field present in `patch`, returning the merged record.
    ///
    /// A field set to `Some("")` is cleared; `None` leaves it untouched.
    pub fn merged(&self, patch: BookPatch) -> Book {
        Book {
            id: self.id.clone(),
            isbn: patch.isbn.unwrap_or_else(|| self.isbn.clone()),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            author: patch.author.unwrap_or_else(|| self.author.clone()),
            published: patch.published.unwrap_or_else(|| self.published.clone()),
        }
    }
}

/// Body of a create request; the id is generated server-side
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published: String,
}

impl NewBook {
    /// Checks the fields a new record must carry
    pub fn validate(&self) -> Result<(), String> {
        if self.isbn.trim().is_empty() {
            return Err("isbn must not be empty".to_string());
        }
        Ok(())
    }

    /// Attach an id and produce the stored record
    pub fn into_book(self, id: impl Into<String>) -> Book {
        Book {
            id: id.into(),
            isbn: self.isbn,
            title: self.title,
            author: self.author,
            published: self.published,
        }
    }
}

/// Body of a partial update
///
/// Omitted fields deserialize to `None`. Unknown keys, including `id`,
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookPatch {
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}
