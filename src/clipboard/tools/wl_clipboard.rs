//! Linux Wayland clipboard tools.

use std::process::Command;

use super::{binary_exists, capture_text_from, pipe_text_into};
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux Wayland clipboard pair using wl-copy and wl-paste.
pub struct WlClipboard;

impl WlClipboard {
    /// Create a new WlClipboard tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for WlClipboard {
    fn name(&self) -> &'static str {
        "wl-clipboard"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && binary_exists("wl-copy")
    }

    fn write_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_text_into(&mut Command::new("wl-copy"), text)
    }

    fn read_text(&self) -> Result<String, ToolError> {
        // wl-paste appends a newline unless told not to.
        capture_text_from(Command::new("wl-paste").arg("--no-newline"))
    }
}

impl Default for WlClipboard {
    fn default() -> Self {
        Self::new()
    }
}
