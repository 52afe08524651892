use std::sync::Arc;

use tracing::error;

use crate::{Result, notes::Note, storage::Storage};

/// The persistent slot holding a serialized note collection.
///
/// The slot's value is a JSON array of [`Note`]s. A value that can't be read back is treated
/// as if the slot were empty.
#[derive(Debug, Clone)]
pub struct NoteStore {
    storage: Arc<dyn Storage>,
    key: String,
}

impl NoteStore {
    pub fn new(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored collection. Failures are logged and yield an empty collection.
    pub fn load(&self) -> Vec<Note> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read notes from slot '{}': {e}", self.key);
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            error!("Failed to load notes: {e}");
            Vec::new()
        })
    }

    /// Overwrite the slot with `notes`.
    pub fn save(&self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string(notes)?;
        self.storage.set(&self.key, &raw)
    }

    /// Remove the slot entirely.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(&self.key)
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::{
        notes::{Note, NoteId, NoteStore},
        storage::{MemoryStorage, Storage},
    };

    #[test]
    fn test_save_load() {
        let storage = MemoryStorage::new();
        let store = NoteStore::new(Arc::new(storage.clone()), "myNotes");
        let notes = vec![
            Note::new(NoteId::from("2"), "second"),
            Note::new(NoteId::from("1"), "first"),
        ];

        store.save(&notes).unwrap();

        assert!(storage.contains("myNotes"));
        assert_eq!(store.load(), notes);
    }

    #[test]
    fn test_load_corrupted() {
        let storage = MemoryStorage::new();
        storage.set("myNotes", "{not json").unwrap();

        let store = NoteStore::new(Arc::new(storage), "myNotes");

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clear() {
        let storage = MemoryStorage::new();
        let store = NoteStore::new(Arc::new(storage.clone()), "myNotes");

        store.save(&[Note::new(NoteId::from("1"), "x")]).unwrap();
        store.clear().unwrap();

        assert!(!storage.contains("myNotes"));
        assert!(store.load().is_empty());
    }
}
