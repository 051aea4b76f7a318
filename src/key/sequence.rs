//! Canonical key sequences.
//!
//! Every key the editor can see - a plain byte, a control code, a
//! Meta-prefixed pair, or a multi-byte CSI sequence - is normalized into a
//! `KeySequence`. Keymap lookup compares these byte-for-byte, so two
//! sequences are interchangeable exactly when their bytes match.

use std::fmt;

use crate::error::EditorError;

/// Backing storage size. Classification accepts one byte less so an
/// overlong escape drain can be detected and rejected.
pub const MAX_SEQUENCE_BYTES: usize = 8;

/// An immutable 1-7 byte key sequence in canonical form.
///
/// Unused storage bytes are kept zeroed, so the derived equality and hash
/// treat canonical forms as unique bitstrings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySequence {
    bytes: [u8; MAX_SEQUENCE_BYTES],
    len: u8,
}

impl KeySequence {
    /// Wrap raw bytes into a sequence.
    ///
    /// This is the classifier for already-disambiguated input: it performs
    /// no interpretation beyond the length check.
    pub fn from_bytes(input: &[u8]) -> Result<Self, EditorError> {
        if input.is_empty() {
            return Err(EditorError::EmptySequence);
        }
        if input.len() >= MAX_SEQUENCE_BYTES {
            return Err(EditorError::SequenceTooLong(input.len()));
        }
        let mut bytes = [0u8; MAX_SEQUENCE_BYTES];
        bytes[..input.len()].copy_from_slice(input);
        Ok(Self {
            bytes,
            len: input.len() as u8,
        })
    }

    /// Sequence holding a single byte.
    pub fn single(byte: u8) -> Self {
        let mut bytes = [0u8; MAX_SEQUENCE_BYTES];
        bytes[0] = byte;
        Self { bytes, len: 1 }
    }

    /// The sequence's bytes, without the zeroed tail.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of bytes in the sequence.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false: sequences hold at least one byte by construction.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First byte of the sequence.
    pub fn first(&self) -> u8 {
        self.bytes[0]
    }
}

impl fmt::Debug for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeySequence({:?})", self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_accepts_one_to_seven_bytes() {
        assert!(KeySequence::from_bytes(&[1]).is_ok());
        assert!(KeySequence::from_bytes(&[1, 2, 3, 4, 5, 6, 7]).is_ok());
    }

    #[test]
    fn from_bytes_rejects_empty_input() {
        assert!(matches!(
            KeySequence::from_bytes(&[]),
            Err(EditorError::EmptySequence)
        ));
    }

    #[test]
    fn from_bytes_rejects_overlong_input() {
        assert!(matches!(
            KeySequence::from_bytes(&[0; 8]),
            Err(EditorError::SequenceTooLong(8))
        ));
    }

    #[test]
    fn equality_is_byte_exact() {
        let a = KeySequence::from_bytes(&[27, b'f']).unwrap();
        let b = KeySequence::from_bytes(&[27, b'f']).unwrap();
        let c = KeySequence::from_bytes(&[27, b'b']).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn same_prefix_different_length_are_distinct() {
        let short = KeySequence::from_bytes(&[27]).unwrap();
        let long = KeySequence::from_bytes(&[27, 0]).unwrap();
        assert_ne!(short, long);
    }

    #[test]
    fn single_matches_from_bytes() {
        assert_eq!(KeySequence::single(1), KeySequence::from_bytes(&[1]).unwrap());
    }

    #[test]
    fn as_bytes_excludes_zeroed_tail() {
        let seq = KeySequence::from_bytes(&[27, 91, 65]).unwrap();
        assert_eq!(seq.as_bytes(), &[27, 91, 65]);
        assert_eq!(seq.len(), 3);
    }
}
