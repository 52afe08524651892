//! The note model and the collection that owns it.

use chrono::Utc;
use derive_more::{Display, From};
use getset::Getters;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

mod notebook;
mod store;

pub use notebook::Notebook;
pub use store::NoteStore;

/// Identifies a [`Note`]. Derived from the creation time in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generate a timestamp-derived id that doesn't clash with any note in `taken`.
    pub(crate) fn generate(taken: &[Note]) -> Self {
        let mut millis = Utc::now().timestamp_millis();

        loop {
            let candidate = millis.to_string();
            if !taken.iter().any(|note| note.id.0 == candidate) {
                return Self(candidate);
            }
            millis = millis.saturating_add(1);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NoteId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NoteStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("approved")]
    Approved,
}

impl NoteStatus {
    /// The opposite status
    pub fn toggled(self) -> Self {
        match self {
            NoteStatus::Pending => NoteStatus::Approved,
            NoteStatus::Approved => NoteStatus::Pending,
        }
    }
}

/// A user-authored text entry.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Note {
    id: NoteId,
    content: String,
    /// Older collections were stored without a status, those notes count as pending
    #[serde(default)]
    status: NoteStatus,
}

impl Note {
    pub fn new(id: NoteId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            status: NoteStatus::default(),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == NoteStatus::Approved
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub(crate) fn toggle_status(&mut self) -> NoteStatus {
        self.status = self.status.toggled();
        self.status
    }
}

/// A view predicate over the note collection.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    #[display("all")]
    All,
    #[display("pending")]
    Pending,
    #[display("approved")]
    Approved,
}

impl StatusFilter {
    pub fn all() -> impl Iterator<Item = StatusFilter> {
        Self::iter()
    }

    pub fn matches(self, note: &Note) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => note.status == NoteStatus::Pending,
            StatusFilter::Approved => note.status == NoteStatus::Approved,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::notes::{Note, NoteId, NoteStatus, StatusFilter};

    #[test]
    fn test_generate_skips_taken_ids() {
        let first = NoteId::generate(&[]);
        let taken = vec![Note::new(first.clone(), "a")];

        let second = NoteId::generate(&taken);

        assert_ne!(first, second);
        assert!(second.as_str().parse::<i64>().is_ok());
    }

    #[test]
    fn test_status_toggled() {
        assert_eq!(NoteStatus::Pending.toggled(), NoteStatus::Approved);
        assert_eq!(NoteStatus::Pending.toggled().toggled(), NoteStatus::Pending);
    }

    #[test]
    fn test_serialized_shape() {
        let note = Note::new(NoteId::from("1700000000000"), "hello");

        let json = serde_json::to_string(&note).unwrap();

        assert_eq!(
            json,
            r#"{"id":"1700000000000","content":"hello","status":"pending"}"#
        );
    }

    #[test]
    fn test_missing_status_is_pending() {
        let note: Note = serde_json::from_str(r#"{"id":"1","content":"plain"}"#).unwrap();

        assert_eq!(*note.status(), NoteStatus::Pending);
    }

    #[test]
    fn test_filter_matches() {
        let mut note = Note::new(NoteId::from("1"), "x");

        assert!(StatusFilter::All.matches(&note));
        assert!(StatusFilter::Pending.matches(&note));
        assert!(!StatusFilter::Approved.matches(&note));

        note.toggle_status();

        assert!(StatusFilter::Approved.matches(&note));
        assert!(!StatusFilter::Pending.matches(&note));
        assert_eq!(StatusFilter::all().count(), 3);
        assert_eq!(StatusFilter::Approved.to_string(), "approved");
    }
}
