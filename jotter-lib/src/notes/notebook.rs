use std::sync::Arc;

use tracing::debug;

use crate::{
    Result,
    config::CoreConfig,
    notes::{Note, NoteId, NoteStatus, NoteStore, StatusFilter},
    storage::{FileStorage, Storage},
};

/// The note collection, newest first, mirrored to a [`NoteStore`].
///
/// Every mutating method applies the change in memory and then writes the whole collection
/// back. An empty collection removes the stored slot instead of writing an empty array. If the
/// write fails the error is returned but the in-memory change stays.
#[derive(Debug, Clone)]
pub struct Notebook {
    notes: Vec<Note>,
    store: NoteStore,
}

impl Notebook {
    /// Open the notebook stored under `key`, loading whatever was last written there.
    pub fn open(storage: impl Storage + 'static, key: impl Into<String>) -> Self {
        Self::with_store(NoteStore::new(Arc::new(storage), key))
    }

    /// Open the notebook described by the core configuration.
    pub fn from_config(cfg: &CoreConfig) -> Result<Self> {
        let storage = FileStorage::new(cfg.storage_dir()?)?;
        Ok(Self::open(storage, cfg.slot()))
    }

    pub fn with_store(store: NoteStore) -> Self {
        let notes = store.load();
        debug!("Loaded {} notes from slot '{}'", notes.len(), store.key());

        Self { notes, store }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    /// Notes matching `filter`, in collection order.
    pub fn filtered(&self, filter: StatusFilter) -> impl Iterator<Item = &Note> {
        self.notes.iter().filter(move |note| filter.matches(note))
    }

    /// Prepend a new pending note and return its id.
    pub fn add(&mut self, content: impl Into<String>) -> Result<NoteId> {
        let id = NoteId::generate(&self.notes);
        self.notes.insert(0, Note::new(id.clone(), content));

        debug!("Added note {id}");

        self.persist()?;
        Ok(id)
    }

    /// Replace the content of the note with the given id. Returns whether a note matched.
    pub fn update(&mut self, id: &NoteId, content: impl Into<String>) -> Result<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id() == id) else {
            return Ok(false);
        };
        note.set_content(content.into());

        debug!("Updated note {id}");

        self.persist()?;
        Ok(true)
    }

    /// Remove the note with the given id. Returns whether a note matched.
    pub fn remove(&mut self, id: &NoteId) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id() != id);

        if self.notes.len() == before {
            return Ok(false);
        }

        debug!("Removed note {id}");

        self.persist()?;
        Ok(true)
    }

    /// Flip the status of the note with the given id, returning the new status.
    pub fn toggle_status(&mut self, id: &NoteId) -> Result<Option<NoteStatus>> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id() == id) else {
            return Ok(None);
        };
        let status = note.toggle_status();

        debug!("Note {id} is now {status}");

        self.persist()?;
        Ok(Some(status))
    }

    fn persist(&self) -> Result<()> {
        if self.notes.is_empty() {
            self.store.clear()
        } else {
            self.store.save(&self.notes)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        notes::{NoteId, NoteStatus, Notebook, StatusFilter},
        storage::{MemoryStorage, Storage},
    };

    const KEY: &str = "myNotes";

    fn sixty_chars() -> String {
        "a".repeat(60)
    }

    #[test]
    fn test_add_toggle_delete() {
        let storage = MemoryStorage::new();
        let mut notebook = Notebook::open(storage.clone(), KEY);

        let id = notebook.add(sixty_chars()).unwrap();

        assert_eq!(notebook.len(), 1);
        let note = notebook.get(&id).unwrap();
        assert_eq!(note.content(), &sixty_chars());
        assert_eq!(*note.status(), NoteStatus::Pending);
        assert!(storage.contains(KEY));

        assert_eq!(
            notebook.toggle_status(&id).unwrap(),
            Some(NoteStatus::Approved)
        );
        assert!(notebook.get(&id).unwrap().is_approved());

        assert!(notebook.remove(&id).unwrap());
        assert!(notebook.is_empty());
        assert!(!storage.contains(KEY));
    }

    #[test]
    fn test_add_prepends_unique() {
        let mut notebook = Notebook::open(MemoryStorage::new(), KEY);

        let first = notebook.add("first").unwrap();
        let second = notebook.add("second").unwrap();
        let third = notebook.add("third").unwrap();

        let ids: Vec<_> = notebook.notes().iter().map(|n| n.id().clone()).collect();
        assert_eq!(ids, vec![third, second, first]);
    }

    #[test]
    fn test_update_only_touches_target() {
        let mut notebook = Notebook::open(MemoryStorage::new(), KEY);
        let a = notebook.add("a").unwrap();
        let b = notebook.add("b").unwrap();
        let c = notebook.add("c").unwrap();

        assert!(notebook.update(&b, "changed").unwrap());

        let contents: Vec<_> = notebook.notes().iter().map(|n| n.content().as_str()).collect();
        assert_eq!(contents, vec!["c", "changed", "a"]);
        assert_eq!(notebook.get(&a).unwrap().content(), "a");
        assert_eq!(notebook.get(&c).unwrap().content(), "c");
    }

    #[test]
    fn test_missing_id_is_noop() {
        let storage = MemoryStorage::new();
        let mut notebook = Notebook::open(storage.clone(), KEY);
        let missing = NoteId::from("42");

        assert!(!notebook.update(&missing, "x").unwrap());
        assert!(!notebook.remove(&missing).unwrap());
        assert_eq!(notebook.toggle_status(&missing).unwrap(), None);
        assert!(!storage.contains(KEY));
    }

    #[test]
    fn test_remove_keeps_others() {
        let mut notebook = Notebook::open(MemoryStorage::new(), KEY);
        let a = notebook.add("a").unwrap();
        let b = notebook.add("b").unwrap();

        assert!(notebook.remove(&a).unwrap());

        assert_eq!(notebook.len(), 1);
        assert!(notebook.get(&b).is_some());
    }

    #[test]
    fn test_toggle_only_target() {
        let mut notebook = Notebook::open(MemoryStorage::new(), KEY);
        let a = notebook.add("a").unwrap();
        let b = notebook.add("b").unwrap();

        notebook.toggle_status(&a).unwrap();

        assert!(notebook.get(&a).unwrap().is_approved());
        assert!(!notebook.get(&b).unwrap().is_approved());

        notebook.toggle_status(&a).unwrap();
        assert!(!notebook.get(&a).unwrap().is_approved());
    }

    #[test]
    fn test_filtered() {
        let mut notebook = Notebook::open(MemoryStorage::new(), KEY);
        let a = notebook.add("a").unwrap();
        notebook.add("b").unwrap();
        let c = notebook.add("c").unwrap();
        notebook.toggle_status(&a).unwrap();
        notebook.toggle_status(&c).unwrap();

        let approved: Vec<_> = notebook
            .filtered(StatusFilter::Approved)
            .map(|n| n.id().clone())
            .collect();
        assert_eq!(approved, vec![c, a]);
        assert_eq!(notebook.filtered(StatusFilter::Pending).count(), 1);

        let all: Vec<_> = notebook.filtered(StatusFilter::All).cloned().collect();
        assert_eq!(all, notebook.notes());

        let again: Vec<_> = all
            .iter()
            .filter(|n| StatusFilter::All.matches(n))
            .cloned()
            .collect();
        assert_eq!(again, all);
    }

    #[test]
    fn test_reopen_round_trip() {
        let storage = MemoryStorage::new();
        let mut notebook = Notebook::open(storage.clone(), KEY);
        notebook.add("a").unwrap();
        let b = notebook.add("b").unwrap();
        notebook.toggle_status(&b).unwrap();

        let reopened = Notebook::open(storage, KEY);

        assert_eq!(reopened.notes(), notebook.notes());
    }

    #[test]
    fn test_open_corrupted() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "[{\"id\": 1").unwrap();

        let notebook = Notebook::open(storage, KEY);

        assert!(notebook.is_empty());
    }

    #[test]
    fn test_open_plain_list() {
        let storage = MemoryStorage::new();
        storage
            .set(KEY, r#"[{"id":"2","content":"b"},{"id":"1","content":"a"}]"#)
            .unwrap();

        let notebook = Notebook::open(storage, KEY);

        assert_eq!(notebook.len(), 2);
        assert_eq!(notebook.filtered(StatusFilter::Pending).count(), 2);
    }
}
