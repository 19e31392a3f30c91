//! Keybinding struct mapping a keystroke to an intent

use super::intent::Intent;
use super::types::Keystroke;

/// A user keybinding that overrides the built-in classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub intent: Intent,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, intent: Intent) -> Self {
        Self { keystroke, intent }
    }

    /// Binding that disables a key entirely
    pub fn unbind(keystroke: Keystroke) -> Self {
        Self {
            keystroke,
            intent: Intent::None,
        }
    }

    pub fn is_unbind(&self) -> bool {
        self.intent == Intent::None
    }
}
