//! Key sequences, notation, actions and bindings.
//!
//! Raw terminal bytes are classified into [`KeySequence`]s, which a
//! [`KeyMap`] resolves to [`Action`]s. The human-readable notation
//! (`"C-a"`, `"M-f"`, `"DELETE"`) is the only way bindings are created,
//! so every configured key round-trips through [`parse_notation`].

mod action;
mod map;
mod notation;
mod sequence;

pub use action::Action;
pub use map::{KeyBinding, KeyMap};
pub use notation::parse_notation;
pub use sequence::{KeySequence, MAX_SEQUENCE_BYTES};
