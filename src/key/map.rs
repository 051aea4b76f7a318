//! Key bindings.
//!
//! A [`KeyMap`] is a flat list of [`KeyBinding`]s searched linearly on
//! every decoded key. The map is small (a few dozen entries), so a scan
//! beats the bookkeeping of a hash table and keeps listing order stable.

use serde::Serialize;
use tracing::debug;

use super::action::Action;
use super::notation::parse_notation;
use super::sequence::KeySequence;
use crate::error::EditorError;

/// One key-to-action binding.
#[derive(Debug, Clone, Serialize)]
pub struct KeyBinding {
    /// Canonical byte sequence the key decodes to.
    #[serde(skip)]
    pub key: KeySequence,
    /// Action dispatched when the key arrives.
    pub action: Action,
    /// Short human-readable summary for binding listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Notation the binding was created with, e.g. `"C-k"`.
    pub notation: String,
}

/// Mapping from decoded key sequences to editing actions.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: Vec<KeyBinding>,
}

impl KeyMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The default Emacs-style binding set.
    pub fn standard() -> Result<Self, EditorError> {
        let mut map = Self::new();

        // === Point motion ===
        map.bind("C-a", Action::MoveBeginningOfLine, Some("Move to beginning of line"))?;
        map.bind("C-e", Action::MoveEndOfLine, Some("Move to end of line"))?;
        map.bind("C-b", Action::BackwardChar, Some("Move back one character"))?;
        map.bind("C-f", Action::ForwardChar, Some("Move forward one character"))?;
        map.bind("LEFT", Action::BackwardChar, Some("Move back one character"))?;
        map.bind("RIGHT", Action::ForwardChar, Some("Move forward one character"))?;
        map.bind("M-f", Action::ForwardWord, Some("Move forward one word"))?;
        map.bind("M-b", Action::BackwardWord, Some("Move back one word"))?;

        // === Deletion ===
        map.bind("C-d", Action::DeleteChar, Some("Delete character at point"))?;
        map.bind("DELETE", Action::DeleteChar, Some("Delete character at point"))?;
        map.bind("DEL", Action::DeleteBackwardChar, Some("Delete character before point"))?;
        map.bind("C-h", Action::DeleteBackwardChar, Some("Delete character before point"))?;

        // === Region and kill ring ===
        map.bind("C-@", Action::SetMark, Some("Set mark at point"))?;
        map.bind("C-w", Action::KillRegion, Some("Kill region between mark and point"))?;
        map.bind("M-w", Action::KillRegion, Some("Kill region between mark and point"))?;
        map.bind("C-k", Action::KillLine, Some("Kill to end of line"))?;
        map.bind("M-d", Action::KillWord, Some("Kill to end of word"))?;
        map.bind("C-y", Action::Yank, Some("Yank most recent kill"))?;

        // === Line editing ===
        map.bind("C-o", Action::OpenLine, Some("Open a line after point"))?;
        map.bind("C-u", Action::ClearLine, Some("Clear the entire line"))?;

        // === Control ===
        map.bind("C-g", Action::KeyboardQuit, Some("Cancel the prefix argument"))?;
        for digit in 0..=9u8 {
            let notation = format!("M-{digit}");
            map.bind(&notation, Action::DigitArgument, Some("Prefix argument digit"))?;
        }
        map.bind("M--", Action::DigitArgument, Some("Negative prefix argument"))?;

        Ok(map)
    }

    /// Bind `notation` to `action`.
    ///
    /// If the notation resolves to an already-bound key the existing
    /// binding is updated in place and keeps its original notation, so
    /// the map never holds two entries for one sequence.
    pub fn bind(
        &mut self,
        notation: &str,
        action: Action,
        description: Option<&str>,
    ) -> Result<(), EditorError> {
        let key = parse_notation(notation)?;
        if let Some(existing) = self.bindings.iter_mut().find(|b| b.key == key) {
            debug!(notation = %existing.notation, action = %action, "rebinding key");
            existing.action = action;
            existing.description = description.map(str::to_string);
            return Ok(());
        }
        self.bindings.push(KeyBinding {
            key,
            action,
            description: description.map(str::to_string),
            notation: notation.to_string(),
        });
        Ok(())
    }

    /// Remove the binding for `notation`. Returns whether one existed.
    pub fn unbind(&mut self, notation: &str) -> Result<bool, EditorError> {
        let key = parse_notation(notation)?;
        match self.bindings.iter().position(|b| b.key == key) {
            Some(index) => {
                let removed = self.bindings.swap_remove(index);
                debug!(notation = %removed.notation, "unbound key");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Action bound to a decoded key, if any.
    pub fn lookup(&self, key: &KeySequence) -> Option<Action> {
        self.bindings.iter().find(|b| b.key == *key).map(|b| b.action)
    }

    /// Find a binding by notation, matching on the decoded sequence.
    ///
    /// Equivalent notations find each other: looking up `"C-?"` returns
    /// a binding created as `"DEL"`.
    pub fn find_binding_by_notation(
        &self,
        notation: &str,
    ) -> Result<Option<&KeyBinding>, EditorError> {
        let key = parse_notation(notation)?;
        Ok(self.bindings.iter().find(|b| b.key == key))
    }

    /// All bindings in insertion order.
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
