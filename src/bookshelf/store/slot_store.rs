use super::backend::SlotBackend;
use super::{DataStore, DEFAULT_SLOT};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::path::PathBuf;
use tracing::{debug, warn};

/// [`DataStore`] that keeps the whole catalog as a JSON array in one slot.
pub struct SlotStore<B: SlotBackend> {
    backend: B,
    slot: String,
}

impl<B: SlotBackend> SlotStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.slot_location(&self.slot)
    }

    fn save_all(&self, books: &[Book]) -> Result<()> {
        let text = serde_json::to_string(books).map_err(ShelfError::Serialization)?;
        self.backend.write_slot(&self.slot, &text)?;
        debug!(slot = %self.slot, count = books.len(), "saved collection");
        Ok(())
    }
}

impl<B: SlotBackend> DataStore for SlotStore<B> {
    fn fetch_all(&self) -> Result<Vec<Book>> {
        let Some(text) = self.backend.read_slot(&self.slot)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&text).map_err(|source| {
            warn!(slot = %self.slot, error = %source, "slot content is malformed");
            ShelfError::CorruptStore {
                slot: self.slot.clone(),
                source,
            }
        })
    }

    fn add(&mut self, book: &Book) -> Result<()> {
        let mut books = self.fetch_all()?;
        books.push(book.clone());
        self.save_all(&books)
    }

    fn remove_by_isbn(&mut self, isbn: &str) -> Result<usize> {
        let mut books = self.fetch_all()?;
        let before = books.len();
        books.retain(|b| b.isbn != isbn);
        let removed = before - books.len();
        self.save_all(&books)?;
        Ok(removed)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    pub struct StoreFixture {
        pub store: SlotStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: SlotStore::with_backend(MemBackend::new()),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let book = Book::new(
                    format!("Book {}", i + 1),
                    format!("Author {}", i + 1),
                    format!("isbn-{}", i + 1),
                );
                self.store.add(&book).unwrap();
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, isbn: &str) -> Self {
            self.store.add(&Book::new(title, author, isbn)).unwrap();
            self
        }

        pub fn with_raw_slot(self, text: &str) -> Self {
            let slot = self.store.slot().to_string();
            Self {
                store: SlotStore::with_backend(MemBackend::new().with_slot(&slot, text)),
            }
        }
    }
}
