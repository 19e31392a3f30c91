//! Key classification: raw keystrokes to navigation/editing intents

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::{KeyCode, Keystroke, Modifiers};

/// What a key press asks the focused cell to do
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    /// Jump to the first cell of the current row
    MoveLeftToFirst,
    MoveUp,
    MoveRight,
    /// Jump to the last cell of the current row
    MoveRightToLast,
    MoveDown,
    /// Enter edit mode, or leave it when already editing
    ToggleEdit,
    /// Leave edit mode without committing
    CancelEdit,
    /// Unrecognized key; also used in keymaps to unbind a key
    #[default]
    None,
}

impl Intent {
    /// Intents handled by the navigation resolver
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Intent::MoveLeft
                | Intent::MoveLeftToFirst
                | Intent::MoveUp
                | Intent::MoveRight
                | Intent::MoveRightToLast
                | Intent::MoveDown
        )
    }

    /// Intents handled by the edit-mode coordinator
    pub fn is_edit(self) -> bool {
        matches!(self, Intent::ToggleEdit | Intent::CancelEdit)
    }
}

/// Classify a raw key with its modifiers.
///
/// Ctrl qualifies horizontal arrows into row-edge jumps regardless of any
/// other modifiers held. Enter and F2 both toggle edit mode.
pub fn classify(key: KeyCode, mods: Modifiers) -> Intent {
    match key {
        KeyCode::Left if mods.ctrl() => Intent::MoveLeftToFirst,
        KeyCode::Left => Intent::MoveLeft,
        KeyCode::Right if mods.ctrl() => Intent::MoveRightToLast,
        KeyCode::Right => Intent::MoveRight,
        KeyCode::Up => Intent::MoveUp,
        KeyCode::Down => Intent::MoveDown,
        KeyCode::Enter | KeyCode::F(2) => Intent::ToggleEdit,
        KeyCode::Escape => Intent::CancelEdit,
        _ => Intent::None,
    }
}

/// Classify a keystroke with the built-in rules
#[inline]
pub fn classify_keystroke(stroke: &Keystroke) -> Intent {
    classify(stroke.key, stroke.mods)
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::MoveLeft => "MoveLeft",
            Intent::MoveLeftToFirst => "MoveLeftToFirst",
            Intent::MoveUp => "MoveUp",
            Intent::MoveRight => "MoveRight",
            Intent::MoveRightToLast => "MoveRightToLast",
            Intent::MoveDown => "MoveDown",
            Intent::ToggleEdit => "ToggleEdit",
            Intent::CancelEdit => "CancelEdit",
            Intent::None => "None",
        };
        f.write_str(name)
    }
}

// Parses intent names as written in keymap YAML
impl FromStr for Intent {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveLeft" => Ok(Intent::MoveLeft),
            "MoveLeftToFirst" => Ok(Intent::MoveLeftToFirst),
            "MoveUp" => Ok(Intent::MoveUp),
            "MoveRight" => Ok(Intent::MoveRight),
            "MoveRightToLast" => Ok(Intent::MoveRightToLast),
            "MoveDown" => Ok(Intent::MoveDown),
            "ToggleEdit" => Ok(Intent::ToggleEdit),
            "CancelEdit" => Ok(Intent::CancelEdit),
            "None" | "Unbound" => Ok(Intent::None),
            _ => Err(()),
        }
    }
}
