//! Key-value storage backing the note collection.
//!
//! A [`Storage`] maps string keys to string values, the same shape as a browser's local
//! storage. Values are opaque here; the notes module decides what goes in them.

use std::fmt::Debug;

use crate::Result;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub trait Storage: Debug + Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a key that isn't present is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
