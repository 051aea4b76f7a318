//! rawline: an embeddable Emacs-style line editor over a raw terminal
//! byte stream.
//!
//! An [`Editor::read_line`] call owns the terminal for one line: it
//! switches stdin to raw mode, interprets control and meta keys the
//! way Emacs does (`C-a`, `M-f`, `C-k`, `C-y`, prefix arguments), and
//! hands back the finished line. Kills go to an internal ring and are
//! mirrored to the system clipboard through whatever tool is installed
//! (`xclip`, `xsel`, `wl-copy`, `pbcopy`).
//!
//! # Reading lines
//!
//! ```no_run
//! use rawline::{Editor, EditorConfig, ReadOutcome};
//!
//! let mut editor = Editor::new(EditorConfig::default())?;
//! loop {
//!     match editor.read_line()? {
//!         ReadOutcome::Line(text) => println!("got: {text}"),
//!         ReadOutcome::Eof => break,
//!     }
//! }
//! # Ok::<(), rawline::EditorError>(())
//! ```
//!
//! # Changing bindings
//!
//! Bindings are named in Emacs notation and can be replaced at
//! runtime:
//!
//! ```
//! use rawline::{Action, KeyMap};
//!
//! let mut keymap = KeyMap::standard()?;
//! keymap.bind("C-l", Action::ClearLine, Some("Start the line over"))?;
//! # Ok::<(), rawline::EditorError>(())
//! ```

pub mod buffer;
pub mod clipboard;
pub mod editor;
pub mod error;
pub mod key;
pub mod killring;
pub mod prefix;
pub mod render;
pub mod terminal;

pub use buffer::{LineBuffer, Region};
pub use clipboard::{Clipboard, ClipboardTool, ToolError};
pub use editor::{Editor, EditorConfig, ReadOutcome};
pub use error::EditorError;
pub use key::{parse_notation, Action, KeyBinding, KeyMap, KeySequence, MAX_SEQUENCE_BYTES};
pub use killring::{KillRing, DEFAULT_KILL_RING_CAPACITY};
pub use prefix::PrefixArgument;
pub use render::{calculate_lines_used, RenderEngine};
pub use terminal::{ByteSource, RawModeGuard, StdinByteSource};
