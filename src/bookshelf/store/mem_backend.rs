use super::backend::SlotBackend;
use crate::error::{Result, ShelfError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory slot backend for tests and development.
///
/// Uses `RefCell` so `SlotBackend` can take `&self` everywhere; the catalog is
/// single-threaded.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw text, bypassing serialization.
    pub fn with_slot(self, name: &str, text: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(name.to_string(), text.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl SlotBackend for MemBackend {
    fn read_slot(&self, name: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(name).cloned())
    }

    fn write_slot(&self, name: &str, text: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(name.to_string(), text.to_string());
        Ok(())
    }

    fn slot_location(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_independent() {
        let backend = MemBackend::new();
        backend.write_slot("a", "1").unwrap();
        backend.write_slot("b", "2").unwrap();

        assert_eq!(backend.read_slot("a").unwrap().as_deref(), Some("1"));
        assert_eq!(backend.read_slot("b").unwrap().as_deref(), Some("2"));
        assert_eq!(backend.read_slot("c").unwrap(), None);
    }

    #[test]
    fn simulated_write_error_keeps_previous_value() {
        let backend = MemBackend::new().with_slot("books", "old");
        backend.set_simulate_write_error(true);

        assert!(backend.write_slot("books", "new").is_err());
        assert_eq!(backend.read_slot("books").unwrap().as_deref(), Some("old"));
    }
}
