//! Linux xclip clipboard tool.

use std::process::Command;

use super::{binary_exists, capture_text_from, pipe_text_into};
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux X11 clipboard tool using xclip.
///
/// Writes with `xclip -selection clipboard` and reads back with the
/// same selection plus `-o`.
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Xclip {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("xclip")
    }

    fn write_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_text_into(
            Command::new("xclip").args(["-selection", "clipboard"]),
            text,
        )
    }

    fn read_text(&self) -> Result<String, ToolError> {
        capture_text_from(Command::new("xclip").args(["-selection", "clipboard", "-o"]))
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
