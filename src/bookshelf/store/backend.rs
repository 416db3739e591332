use crate::error::Result;
use std::path::PathBuf;

/// Raw key/value I/O for named slots.
///
/// Backends know nothing about books: a slot holds an opaque string that
/// is replaced wholesale on every write.
pub trait SlotBackend {
    /// Read the slot's text.
    /// Returns Ok(None) when the slot has never been written.
    fn read_slot(&self, name: &str) -> Result<Option<String>>;

    /// Overwrite the slot's text.
    /// MUST be atomic: readers see either the old or the new value, never a mix.
    fn write_slot(&self, name: &str, text: &str) -> Result<()>;

    /// Where the slot lives, for display. Virtual for non-file backends.
    fn slot_location(&self, name: &str) -> PathBuf;
}
