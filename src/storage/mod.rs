//! Book storage subsystem
//!
//! Holds the catalog in memory as an ordered list of records.
//!
//! # Design Principles
//!
//! - Insertion order is preserved by every operation
//! - Lookup is a linear scan on `id`
//! - Ids are unique within the store and never rewritten
//! - Bulk-load replaces the whole collection or leaves it untouched
//! - Nothing is written back to disk

mod book;
mod errors;
mod store;

pub use book::{Book, BookPatch, NewBook};
pub use errors::{StorageError, StorageResult};
pub use store::BookStore;
