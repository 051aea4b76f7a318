//! System clipboard integration.
//!
//! Killed text mirrors outward to the system clipboard and yank reads
//! back from it, so kills survive the process and text from other
//! applications can flow in. Every operation is best-effort: a missing
//! or failing tool degrades to a quiet no-op, never an error.

mod tool;
mod tools;

pub use tool::{ClipboardTool, ToolError};
pub use tools::{Pasteboard, WlClipboard, Xclip, Xsel};

use tracing::{debug, trace};

/// Front door for clipboard reads and writes.
///
/// Holds the platform tools in priority order and walks them until one
/// succeeds.
pub struct Clipboard {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl Clipboard {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: tools::platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    /// Create with no tools at all. Every operation becomes a no-op.
    pub fn disabled() -> Self {
        Self { tools: Vec::new() }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn ClipboardTool>] {
        &self.tools
    }

    /// Write `text` to the system clipboard.
    ///
    /// Returns whether any tool accepted it.
    pub fn write(&self, text: &str) -> bool {
        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.write_text(text) {
                Ok(()) => {
                    trace!(tool = tool.name(), bytes = text.len(), "clipboard write");
                    return true;
                }
                Err(err) => {
                    debug!(tool = tool.name(), ?err, "clipboard write failed");
                }
            }
        }
        false
    }

    /// Read the current clipboard text, if any tool can provide it.
    pub fn read(&self) -> Option<String> {
        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.read_text() {
                Ok(text) => {
                    trace!(tool = tool.name(), bytes = text.len(), "clipboard read");
                    return Some(text);
                }
                Err(err) => {
                    debug!(tool = tool.name(), ?err, "clipboard read failed");
                }
            }
        }
        None
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{memory_clipboard, MemoryTool};
    use super::*;

    struct FailTool;

    impl ClipboardTool for FailTool {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn is_available(&self) -> bool {
            true
        }

        fn write_text(&self, _text: &str) -> Result<(), ToolError> {
            Err(ToolError::Failed("broken".to_string()))
        }

        fn read_text(&self) -> Result<String, ToolError> {
            Err(ToolError::Failed("broken".to_string()))
        }
    }

    struct AbsentTool;

    impl ClipboardTool for AbsentTool {
        fn name(&self) -> &'static str {
            "absent"
        }

        fn is_available(&self) -> bool {
            false
        }

        fn write_text(&self, _text: &str) -> Result<(), ToolError> {
            Ok(())
        }

        fn read_text(&self) -> Result<String, ToolError> {
            Ok("should never be seen".to_string())
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let (clipboard, state) = memory_clipboard();
        assert!(clipboard.write("hello"));
        assert_eq!(clipboard.read().as_deref(), Some("hello"));
        assert_eq!(*state.written.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[test]
    fn write_falls_through_failing_tools() {
        let memory = MemoryTool::new();
        let state = memory.state();
        let clipboard = Clipboard::with_tools(vec![Box::new(FailTool), Box::new(memory)]);

        assert!(clipboard.write("text"));
        assert_eq!(*state.written.lock().unwrap(), vec!["text".to_string()]);
    }

    #[test]
    fn unavailable_tools_are_skipped() {
        let memory = MemoryTool::new();
        let state = memory.state();
        let clipboard = Clipboard::with_tools(vec![Box::new(AbsentTool), Box::new(memory)]);

        assert!(clipboard.write("text"));
        assert_eq!(*state.written.lock().unwrap(), vec!["text".to_string()]);
        assert_eq!(clipboard.read().as_deref(), Some("text"));
    }

    #[test]
    fn disabled_clipboard_is_inert() {
        let clipboard = Clipboard::disabled();
        assert!(!clipboard.write("text"));
        assert_eq!(clipboard.read(), None);
    }

    #[test]
    fn read_with_only_failing_tools_returns_none() {
        let clipboard = Clipboard::with_tools(vec![Box::new(FailTool)]);
        assert_eq!(clipboard.read(), None);
    }
}
