//! Validation rules for note content being typed into a form.

use crate::{Error, Result};

/// Fewest characters a note may have
pub const MIN_LENGTH: u16 = 50;
/// Most characters a note may have
pub const MAX_LENGTH: u16 = 500;

/// Check that `content` has between [`MIN_LENGTH`] and [`MAX_LENGTH`] characters.
pub fn validate(content: &str) -> Result<()> {
    let count = char_count(content);

    if (usize::from(MIN_LENGTH)..=usize::from(MAX_LENGTH)).contains(&count) {
        Ok(())
    } else {
        Err(Error::ContentLength {
            count,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
    }
}

fn char_count(content: &str) -> usize {
    content.chars().count()
}

/// The text of a note that hasn't been submitted yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    content: String,
}

impl Draft {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            content: initial.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn char_count(&self) -> usize {
        char_count(&self.content)
    }

    /// How full the draft is relative to [`MAX_LENGTH`], as a percentage capped at 100.
    pub fn progress(&self) -> f32 {
        let count = self.char_count().min(usize::from(MAX_LENGTH));

        u16::try_from(count).map_or(100.0, |count| {
            f32::from(count) / f32::from(MAX_LENGTH) * 100.0
        })
    }

    pub fn is_valid(&self) -> bool {
        validate(&self.content).is_ok()
    }

    /// Take the content out of a valid draft, leaving it empty. Invalid drafts are left alone.
    pub fn submit(&mut self) -> Option<String> {
        self.is_valid().then(|| std::mem::take(&mut self.content))
    }
}
