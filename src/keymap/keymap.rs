//! Keymap struct: user overrides layered over the built-in classifier

use std::collections::HashMap;

use super::binding::Keybinding;
use super::intent::{classify_keystroke, Intent};
use super::types::Keystroke;

/// Resolves keystrokes to intents.
///
/// Exact-match user bindings win; everything else falls through to
/// [`classify`](super::classify). Lookup never mutates, so the keymap can be
/// shared by every grid in a registry.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    /// Keymap with no overrides (pure built-in classification)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding; a later binding for the same keystroke replaces the earlier one
    pub fn add_binding(&mut self, mut binding: Keybinding) {
        binding.keystroke = binding.keystroke.normalized();
        if let Some(&idx) = self.lookup.get(&binding.keystroke) {
            self.bindings[idx] = binding;
            return;
        }
        self.lookup.insert(binding.keystroke, self.bindings.len());
        self.bindings.push(binding);
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// Classify a keystroke, consulting user bindings first
    pub fn classify(&self, stroke: &Keystroke) -> Intent {
        let stroke = stroke.normalized();
        match self.lookup.get(&stroke) {
            Some(&idx) => self.bindings[idx].intent,
            None => classify_keystroke(&stroke),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    #[test]
    fn test_empty_keymap_uses_builtin_rules() {
        let keymap = Keymap::new();
        assert_eq!(
            keymap.classify(&Keystroke::ctrl(KeyCode::Left)),
            Intent::MoveLeftToFirst
        );
        assert_eq!(
            keymap.classify(&Keystroke::key(KeyCode::Enter)),
            Intent::ToggleEdit
        );
    }

    #[test]
    fn test_override_and_unbind() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(Keystroke::key(KeyCode::Home), Intent::MoveLeftToFirst),
            Keybinding::unbind(Keystroke::key(KeyCode::F(2))),
        ]);

        assert_eq!(
            keymap.classify(&Keystroke::key(KeyCode::Home)),
            Intent::MoveLeftToFirst
        );
        assert_eq!(keymap.classify(&Keystroke::key(KeyCode::F(2))), Intent::None);
        // Untouched keys still classify normally
        assert_eq!(
            keymap.classify(&Keystroke::key(KeyCode::Enter)),
            Intent::ToggleEdit
        );
    }

    #[test]
    fn test_later_binding_replaces_earlier() {
        let stroke = Keystroke::new(KeyCode::Char('j'), Modifiers::ALT);
        let mut keymap = Keymap::new();
        keymap.add_binding(Keybinding::new(stroke, Intent::MoveUp));
        keymap.add_binding(Keybinding::new(stroke, Intent::MoveDown));

        assert_eq!(keymap.bindings().len(), 1);
        assert_eq!(keymap.classify(&stroke), Intent::MoveDown);
    }

    #[test]
    fn test_shifted_char_matches_lowercase_binding() {
        let bindings =
            crate::keymap::parse_keymap_yaml("bindings:\n  - key: shift+e\n    intent: ToggleEdit\n")
                .unwrap();
        let keymap = Keymap::with_bindings(bindings);

        let host = Keystroke {
            key: KeyCode::Char('E'),
            mods: Modifiers::SHIFT,
        };
        assert_eq!(keymap.classify(&host), Intent::ToggleEdit);
        assert_eq!(
            keymap.classify(&Keystroke::new(KeyCode::Char('E'), Modifiers::SHIFT)),
            Intent::ToggleEdit
        );
    }
}
