use std::{fs, path::Path, sync::Arc};

use jotter_lib::{Result, StatusFilter, fs::config_dir};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::theme::Theme;

mod theme;

const CURRENT_CONFIG_VERSION: u16 = 1;
const FILE_NAME: &str = "gui.toml";

/// Handle to the GUI's configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// The GUI's configuration, serialized to TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    pub version: u16,
    pub theme: Theme,
    pub notes: Notes,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notes {
    /// Status filter selected when the app was last used
    pub filter: StatusFilter,
}

impl GuiConfig {
    pub fn load() -> Self {
        match config_dir() {
            Ok(dir) => Self::load_from(&dir.join(FILE_NAME)),
            Err(e) => {
                warn!("Using the default GUI configuration: {e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            let parsed = fs::read_to_string(path)
                .map_err(jotter_lib::Error::from)
                .and_then(|contents| Ok(toml::from_str(&contents)?));

            parsed.unwrap_or_else(|e| {
                warn!("Ignoring unreadable {}: {e}", path.display());
                Self::default()
            })
        } else {
            let cfg = Self::default();
            if let Err(e) = cfg.save_to(path) {
                warn!("Failed to write {}: {e}", path.display());
            }
            cfg
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

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            theme: Theme::default(),
            notes: Notes::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use jotter_lib::StatusFilter;
    use tempfile::tempdir;

    use crate::config::{GuiConfig, theme::Theme};

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");

        let mut cfg = GuiConfig::default();
        cfg.theme = Theme::Dark;
        cfg.notes.filter = StatusFilter::Approved;
        cfg.save_to(&path).unwrap();

        assert_eq!(GuiConfig::load_from(&path), cfg);
    }

    #[test]
    fn test_garbage_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");
        fs::write(&path, "theme = 12").unwrap();

        assert_eq!(GuiConfig::load_from(&path), GuiConfig::default());
    }

    #[test]
    fn test_missing_is_created() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gui.toml");

        GuiConfig::load_from(&path);

        assert!(path.exists());
    }
}
