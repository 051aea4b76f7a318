//! Editing actions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every editing command a key can be bound to.
///
/// Names follow the Emacs command vocabulary and serialize in
/// kebab-case (`"kill-line"`, `"move-beginning-of-line"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    // === Point motion ===
    MoveBeginningOfLine,
    MoveEndOfLine,
    BackwardChar,
    ForwardChar,
    ForwardWord,
    BackwardWord,

    // === Deletion ===
    DeleteChar,
    DeleteBackwardChar,

    // === Region and kill ring ===
    SetMark,
    KillRegion,
    KillLine,
    KillWord,
    Yank,

    // === Line editing ===
    OpenLine,
    ClearLine,

    // === Control ===
    DigitArgument,
    KeyboardQuit,
}

impl Action {
    /// Stable command name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Action::MoveBeginningOfLine => "move-beginning-of-line",
            Action::MoveEndOfLine => "move-end-of-line",
            Action::BackwardChar => "backward-char",
            Action::ForwardChar => "forward-char",
            Action::ForwardWord => "forward-word",
            Action::BackwardWord => "backward-word",
            Action::DeleteChar => "delete-char",
            Action::DeleteBackwardChar => "delete-backward-char",
            Action::SetMark => "set-mark",
            Action::KillRegion => "kill-region",
            Action::KillLine => "kill-line",
            Action::KillWord => "kill-word",
            Action::Yank => "yank",
            Action::OpenLine => "open-line",
            Action::ClearLine => "clear-line",
            Action::DigitArgument => "digit-argument",
            Action::KeyboardQuit => "keyboard-quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
