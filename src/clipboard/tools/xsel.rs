//! Linux xsel clipboard tool.

use std::process::Command;

use super::{binary_exists, capture_text_from, pipe_text_into};
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux X11 clipboard tool using xsel.
///
/// Fallback for systems without xclip.
pub struct Xsel;

impl Xsel {
    /// Create a new Xsel tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xsel {
    fn name(&self) -> &'static str {
        "xsel"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("xsel")
    }

    fn write_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_text_into(
            Command::new("xsel").args(["--clipboard", "--input"]),
            text,
        )
    }

    fn read_text(&self) -> Result<String, ToolError> {
        capture_text_from(Command::new("xsel").args(["--clipboard", "--output"]))
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
