use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;

use crate::errors::AppError;

pub trait SlotStorage: Send + Sync {
    fn read(&self, slot: &str) -> Result<Option<String>, AppError>;

    fn write(&self, slot: &str, contents: &str) -> Result<(), AppError>;
}

/// One `<slot>.json` file per slot inside a data directory.
pub struct FileSlotStorage {
    dir: PathBuf,
}

impl FileSlotStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| {
            AppError::StorageError(format!("failed to create data directory '{}': {}", dir.display(), err))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> Result<PathBuf, AppError> {
        if !is_valid_slot_name(slot) {
            return Err(AppError::StorageError(format!("invalid slot name '{}'", slot)));
        }
        Ok(self.dir.join(format!("{}.json", slot)))
    }
}

impl SlotStorage for FileSlotStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, AppError> {
        let path = self.slot_path(slot)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), AppError> {
        let path = self.slot_path(slot)?;
        // Readers never observe a half-written slot.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &path)?;
        debug!("wrote {} bytes to slot '{}'", contents.len(), path.display());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(slot: &str, contents: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(slot.to_string(), contents.to_string());
        }
        storage
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, AppError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| AppError::InternalServerError("slot lock poisoned".into()))?;
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), AppError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| AppError::InternalServerError("slot lock poisoned".into()))?;
        slots.insert(slot.to_string(), contents.to_string());
        Ok(())
    }
}

pub fn is_valid_slot_name(slot: &str) -> bool {
    !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSlotStorage::new(dir.path()).unwrap();
        assert_eq!(storage.read("departments").unwrap(), None);
    }

    #[test]
    fn file_slot_overwrites_whole_contents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSlotStorage::new(dir.path().join("nested")).unwrap();

        storage.write("departments", "[1,2,3]").unwrap();
        storage.write("departments", "[]").unwrap();

        assert_eq!(storage.read("departments").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("departments.json").exists());
        assert!(!dir.path().join("nested").join("departments.json.tmp").exists());
    }

    #[test]
    fn file_slot_rejects_path_like_names() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSlotStorage::new(dir.path()).unwrap();
        assert!(storage.write("../escape", "[]").is_err());
        assert!(storage.read("").is_err());
    }

    #[test]
    fn memory_slots_are_independent() {
        let storage = MemorySlotStorage::with_slot("a", "1");
        storage.write("b", "2").unwrap();
        assert_eq!(storage.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.read("b").unwrap().as_deref(), Some("2"));
        assert_eq!(storage.read("c").unwrap(), None);
    }
}
