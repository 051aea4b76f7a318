//! Editor error types.

/// Errors surfaced by the editing engine.
///
/// User-input conditions (unrecognized sequences, prefix overflow, absent
/// clipboard, stale marks) are handled as no-ops and never show up here;
/// this enum covers misconfiguration and I/O failures only.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// A key notation string could not be parsed into a sequence.
    #[error("invalid key notation '{0}'")]
    InvalidNotation(String),

    /// A raw sequence with no bytes was offered for classification.
    #[error("empty key sequence")]
    EmptySequence,

    /// A raw sequence exceeded the classifiable length.
    #[error("key sequence too long: {0} bytes")]
    SequenceTooLong(usize),

    /// Terminal or byte-source I/O failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
