//! # Storage Layer
//!
//! The catalog is persisted as one ordered collection inside a single named
//! key/value **slot**. Every mutation loads the whole collection, changes it and
//! writes the whole collection back. There is no incremental indexing.
//!
//! Two traits split the work:
//!
//! - [`DataStore`]: the "what". Book-level operations (`fetch_all`, `add`,
//!   `remove_by_isbn`, `exists`). This is the dependency the flows receive.
//! - [`backend::SlotBackend`]: the "how". Raw text in, raw text out for a named
//!   slot (filesystem or memory).
//!
//! [`slot_store::SlotStore`] glues them: JSON (de)serialization of the
//! collection over any backend.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── books.json     # the slot: JSON array of {title, author, isbn}
//! └── config.json    # configuration
//! ```
//!
//! ## Failure Model
//!
//! - Absent slot: empty collection, not an error.
//! - Malformed slot: [`ShelfError::CorruptStore`](crate::error::ShelfError::CorruptStore).
//!   Mutations read before they write, so a corrupt slot is never overwritten.

use crate::error::Result;
use crate::model::Book;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod slot_store;

pub use slot_store::SlotStore;

/// Default slot name for the catalog collection.
pub const DEFAULT_SLOT: &str = "books";

/// Book-level storage operations.
///
/// Duplicate isbns are not rejected here; uniqueness is the submit flow's job.
pub trait DataStore {
    /// Load the full collection in insertion order. Absent slot yields `[]`.
    fn fetch_all(&self) -> Result<Vec<Book>>;

    /// Append one book and rewrite the collection.
    fn add(&mut self, book: &Book) -> Result<()>;

    /// Drop every book with this isbn and rewrite the collection.
    /// Returns how many were removed.
    fn remove_by_isbn(&mut self, isbn: &str) -> Result<usize>;

    fn exists(&self, isbn: &str) -> Result<bool> {
        Ok(self.fetch_all()?.iter().any(|b| b.isbn == isbn))
    }
}
