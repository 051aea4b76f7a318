//! macOS pasteboard tools.

use std::process::Command;

use super::{capture_text_from, pipe_text_into};
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// macOS pasteboard pair using pbcopy and pbpaste.
pub struct Pasteboard;

impl Pasteboard {
    /// Create a new Pasteboard tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Pasteboard {
    fn name(&self) -> &'static str {
        "pasteboard"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn write_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_text_into(&mut Command::new("pbcopy"), text)
    }

    fn read_text(&self) -> Result<String, ToolError> {
        capture_text_from(&mut Command::new("pbpaste"))
    }
}

impl Default for Pasteboard {
    fn default() -> Self {
        Self::new()
    }
}
