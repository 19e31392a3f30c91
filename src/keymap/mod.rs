//! Key classification for grid cells
//!
//! Turns raw key presses into abstract [`Intent`]s:
//!
//! ```text
//! host key event → Keystroke → Keymap::classify() → Intent
//! ```
//!
//! The built-in rules ([`classify`]) are a pure function. A [`Keymap`] can
//! layer user overrides from YAML on top of them.

mod binding;
mod config;
mod intent;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use intent::{classify, classify_keystroke, Intent};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};

#[cfg(test)]
mod tests;
