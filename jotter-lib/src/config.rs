use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Result,
    fs::{config_dir, data_dir},
};

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "core.toml";

/// Storage key the note collection lives under unless configured otherwise.
pub const DEFAULT_SLOT: &str = "myNotes";

/// The library's core configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    version: u16,
    /// Overrides the directory notes are stored in. Defaults to the XDG data directory.
    storage_dir: Option<PathBuf>,
    /// Key of the storage slot holding the note collection
    slot: String,
}

impl CoreConfig {
    /// Load the configuration from the Jotter configuration directory.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join(FILE_NAME))
    }

    /// Load the configuration from `path`, writing out the defaults if the file doesn't exist
    /// yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let cfg = Self::default();
            cfg.save_to(path)?;
            debug!("Wrote default configuration to {}", path.display());
            Ok(cfg)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&config_dir()?.join(FILE_NAME))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;

        Ok(())
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    /// The directory notes are stored in.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => data_dir(),
        }
    }

    pub fn set_storage_dir(&mut self, dir: impl Into<PathBuf>) {
        self.storage_dir = Some(dir.into());
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            storage_dir: None,
            slot: DEFAULT_SLOT.into(),
        }
    }
}
