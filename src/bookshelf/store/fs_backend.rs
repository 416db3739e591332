use super::backend::SlotBackend;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

const SLOT_EXT: &str = ".json";

/// Filesystem backend: one `<slot>.json` file per slot under `root`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn slot_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, SLOT_EXT))
    }

    fn checked_slot_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(ShelfError::Store(format!("Invalid slot name: '{}'", name)));
        }
        Ok(self.slot_path(name))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }
}

impl SlotBackend for FsBackend {
    fn read_slot(&self, name: &str) -> Result<Option<String>> {
        let path = self.checked_slot_path(name)?;
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path).map_err(ShelfError::Io)?;
        debug!(slot = name, bytes = text.len(), "read slot");
        Ok(Some(text))
    }

    fn write_slot(&self, name: &str, text: &str) -> Result<()> {
        let path = self.checked_slot_path(name)?;
        self.ensure_dir()?;

        let tmp_file = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp_file, text).map_err(ShelfError::Io)?;
        fs::rename(&tmp_file, &path).map_err(ShelfError::Io)?;

        debug!(slot = name, bytes = text.len(), "wrote slot");
        Ok(())
    }

    fn slot_location(&self, name: &str) -> PathBuf {
        self.slot_path(name)
    }
}
