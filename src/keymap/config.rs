//! YAML keymap parsing
//!
//! ```yaml
//! bindings:
//!   - key: "home"
//!     intent: MoveLeftToFirst
//!   - key: "f2"
//!     intent: None   # unbind
//! ```

use std::path::Path;

use serde::Deserialize;

use super::binding::Keybinding;
use super::intent::Intent;
use super::keymap::Keymap;
use super::types::{KeyCode, Keystroke, Modifiers};

#[derive(Debug, Deserialize)]
struct KeymapFile {
    #[serde(default)]
    bindings: Vec<BindingEntry>,
}

#[derive(Debug, Deserialize)]
struct BindingEntry {
    key: String,
    intent: String,
}

/// Load a keymap from a YAML file
pub fn load_keymap_file(path: &Path) -> Result<Keymap, KeymapError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeymapError::Io(e.to_string()))?;
    let bindings = parse_keymap_yaml(&content)?;
    tracing::info!(
        "Loaded keymap from {} ({} bindings)",
        path.display(),
        bindings.len()
    );
    Ok(Keymap::with_bindings(bindings))
}

/// Parse keybindings from a YAML string
pub fn parse_keymap_yaml(yaml: &str) -> Result<Vec<Keybinding>, KeymapError> {
    let file: KeymapFile =
        serde_yaml::from_str(yaml).map_err(|e| KeymapError::Parse(e.to_string()))?;

    file.bindings
        .iter()
        .map(|entry| {
            let keystroke = parse_key_string(&entry.key)?;
            let intent = entry
                .intent
                .parse::<Intent>()
                .map_err(|_| KeymapError::InvalidIntent(entry.intent.clone()))?;
            Ok(Keybinding::new(keystroke, intent))
        })
        .collect()
}

/// Parse a key string like "ctrl+left" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeymapError> {
    let mut mods = Modifiers::NONE;
    let mut key = None;

    for part in key_str.split('+').map(str::trim) {
        let part = part.to_lowercase();
        match part.as_str() {
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" | "cmd" => mods = mods | Modifiers::META,
            _ => {
                if key.is_some() {
                    return Err(KeymapError::InvalidKey(format!(
                        "Multiple keys in binding: {}",
                        key_str
                    )));
                }
                key = Some(parse_key_code(&part)?);
            }
        }
    }

    let key =
        key.ok_or_else(|| KeymapError::InvalidKey(format!("No key found in binding: {}", key_str)))?;
    Ok(Keystroke::new(key, mods))
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeymapError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),
        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdn" => Ok(KeyCode::PageDown),
        _ => key
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| KeymapError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Errors that can occur when loading keymaps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    Io(String),
    Parse(String),
    InvalidKey(String),
    InvalidIntent(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::Io(e) => write!(f, "IO error: {}", e),
            KeymapError::Parse(e) => write!(f, "Parse error: {}", e),
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeymapError::InvalidIntent(i) => write!(f, "Invalid intent: {}", i),
        }
    }
}

impl std::error::Error for KeymapError {}
