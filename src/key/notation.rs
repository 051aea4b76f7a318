//! Human-readable key notation.
//!
//! Parses strings like `"C-a"`, `"M-f"`, `"C-M-x"`, `"DEL"` or `"LEFT"`
//! into canonical byte sequences. Meta prepends an escape byte; Control
//! maps the base character through the terminal control-code table.

use super::sequence::KeySequence;
use crate::error::EditorError;

const ESC: u8 = 0x1b;

/// Parse key notation into a canonical sequence.
///
/// Accepted forms:
/// - a single printable character (`"a"`, `"/"`)
/// - named keys: `DEL`/`BS`, `TAB`, `RET`/`ENTER`, `SPC`, the arrow keys
///   `UP`/`DOWN`/`RIGHT`/`LEFT`, and `DELETE` (the `ESC [ 3 ~` CSI key)
/// - `C-` and `M-` prefixes, composable in any order (`"C-M-x"`)
///
/// Fails with [`EditorError::InvalidNotation`] when the base key is empty
/// or unknown, or when `C-` is applied to a character with no control
/// code (including the multi-byte named keys).
pub fn parse_notation(text: &str) -> Result<KeySequence, EditorError> {
    let mut ctrl = false;
    let mut meta = false;
    let mut rest = text;

    loop {
        if let Some(stripped) = rest.strip_prefix("C-") {
            ctrl = true;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("M-") {
            meta = true;
            rest = stripped;
        } else {
            break;
        }
    }

    let base: &[u8] = match rest {
        "DEL" | "BS" => &[127],
        "TAB" => b"\t",
        "RET" | "ENTER" => b"\r",
        "SPC" => b" ",
        "UP" => &[ESC, b'[', b'A'],
        "DOWN" => &[ESC, b'[', b'B'],
        "RIGHT" => &[ESC, b'[', b'C'],
        "LEFT" => &[ESC, b'[', b'D'],
        "DELETE" => &[ESC, b'[', b'3', b'~'],
        single if single.len() == 1 => single.as_bytes(),
        _ => return Err(EditorError::InvalidNotation(text.to_string())),
    };

    let mut bytes = Vec::with_capacity(5);
    if meta {
        bytes.push(ESC);
    }
    if ctrl {
        // Control only composes with a single-byte base.
        if base.len() != 1 {
            return Err(EditorError::InvalidNotation(text.to_string()));
        }
        match control_code(base[0]) {
            Some(code) => bytes.push(code),
            None => return Err(EditorError::InvalidNotation(text.to_string())),
        }
    } else {
        bytes.extend_from_slice(base);
    }

    KeySequence::from_bytes(&bytes)
}

/// Terminal control code for a base character, if one exists.
fn control_code(byte: u8) -> Option<u8> {
    match byte {
        b'a'..=b'z' => Some(byte - b'a' + 1),
        b'@' => Some(0),
        b'?' => Some(127),
        b'[' => Some(27),
        b'\\' => Some(28),
        b']' => Some(29),
        b'^' => Some(30),
        b'-' | b'_' => Some(31),
        _ => None,
    }
}
