//! Platform-specific clipboard tools.

mod pasteboard;
mod wl_clipboard;
mod xclip;
mod xsel;

pub use pasteboard::Pasteboard;
pub use wl_clipboard::WlClipboard;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{ClipboardTool, ToolError};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
            Box::new(WlClipboard::new()),
        ]
    }

    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pasteboard::new())]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Check if a binary is on the PATH.
pub(super) fn binary_exists(binary: &str) -> bool {
    Command::new("which")
        .arg(binary)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Spawn a command and feed `text` to its stdin.
pub(super) fn pipe_text_into(command: &mut Command, text: &str) -> Result<(), ToolError> {
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(spawn_error)?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ToolError::Failed(e.to_string()))?;
    }

    let status = child.wait().map_err(|e| ToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed(format!("exit status {status}")))
    }
}

/// Run a command and capture its stdout as text.
pub(super) fn capture_text_from(command: &mut Command) -> Result<String, ToolError> {
    let output = command.output().map_err(spawn_error)?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(ToolError::Failed(format!("exit status {}", output.status)))
    }
}

fn spawn_error(error: std::io::Error) -> ToolError {
    if error.kind() == std::io::ErrorKind::NotFound {
        ToolError::NotFound
    } else {
        ToolError::Failed(error.to_string())
    }
}
