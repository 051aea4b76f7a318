//! ClipboardTool trait and related error types.

/// A tool that can move text to and from the system clipboard.
///
/// Each implementation wraps a specific OS tool (xclip, pbcopy, etc.)
/// and knows how to invoke it correctly.
pub trait ClipboardTool: Send + Sync {
    /// Human-readable name for log messages.
    fn name(&self) -> &'static str;

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Try to write text to the clipboard.
    fn write_text(&self, text: &str) -> Result<(), ToolError>;

    /// Try to read the current clipboard text.
    fn read_text(&self) -> Result<String, ToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone)]
pub enum ToolError {
    /// Tool execution failed
    Failed(String),
    /// Tool binary not found on system
    NotFound,
}
