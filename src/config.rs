//! Grid configuration persistence
//!
//! Stores preferences in `~/.config/cellgrid/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::keymap::{load_keymap_file, Keymap};

/// Grid configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Base CSS class of every cell; state modifiers are derived from it
    #[serde(default = "default_cell_class")]
    pub cell_class: String,

    /// Keymap overrides; defaults to `keymap.yaml` in the config dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keymap: Option<PathBuf>,
}

fn default_cell_class() -> String {
    "grid__td".to_string()
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_class: default_cell_class(),
            keymap: None,
        }
    }
}

impl GridConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from a specific file; any failure falls back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Build the keymap: the configured file if set, else the user keymap
    /// file if present, else built-in rules only
    pub fn load_keymap(&self) -> Keymap {
        let path = self
            .keymap
            .clone()
            .or_else(|| crate::config_paths::keymap_file().filter(|p| p.exists()));

        let Some(path) = path else {
            return Keymap::new();
        };

        match load_keymap_file(&path) {
            Ok(keymap) => keymap,
            Err(e) => {
                tracing::warn!("Failed to load keymap from {}: {}", path.display(), e);
                Keymap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Intent, KeyCode, Keystroke};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GridConfig::load_from(&dir.path().join("config.yaml"));
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.cell_class, "grid__td");
    }

    #[test]
    fn test_invalid_yaml_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "cell_class: [unclosed").unwrap();
        assert_eq!(GridConfig::load_from(&path), GridConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = GridConfig {
            cell_class: "tbl-cell".to_string(),
            keymap: Some(dir.path().join("keys.yaml")),
        };

        config.save_to(&path).unwrap();
        assert_eq!(GridConfig::load_from(&path), config);
    }

    #[test]
    fn test_load_keymap_from_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let keys = dir.path().join("keys.yaml");
        std::fs::write(&keys, "bindings:\n  - key: home\n    intent: MoveLeftToFirst\n").unwrap();

        let config = GridConfig {
            keymap: Some(keys),
            ..GridConfig::default()
        };
        let keymap = config.load_keymap();
        assert_eq!(
            keymap.classify(&Keystroke::key(KeyCode::Home)),
            Intent::MoveLeftToFirst
        );
    }

    #[test]
    fn test_broken_keymap_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let keys = dir.path().join("keys.yaml");
        std::fs::write(&keys, "bindings:\n  - key: nope+nope\n    intent: MoveUp\n").unwrap();

        let config = GridConfig {
            keymap: Some(keys),
            ..GridConfig::default()
        };
        let keymap = config.load_keymap();
        assert!(keymap.bindings().is_empty());
    }
}
