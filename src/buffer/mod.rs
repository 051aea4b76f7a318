//! The editable line.
//!
//! A [`LineBuffer`] owns the text being edited, the point (cursor
//! offset), the mark/region, and the prefix-argument state machine.
//! All editing primitives live here and in the `word` and `kill`
//! submodules; every mutation goes through the bounds-checked
//! [`LineBuffer::splice`] so the point invariant survives any call
//! order.

mod kill;
mod word;

pub use word::is_word_byte;

use crate::editor::EditorConfig;
use crate::key::KeySequence;
use crate::prefix::PrefixArgument;

/// Mark and activation flag for the selection region.
///
/// The mark is a byte offset that may go stale when the buffer shrinks
/// below it; operations re-validate bounds before using it rather than
/// eagerly clearing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Region {
    pub mark: usize,
    pub active: bool,
}

/// A single editable line and its cursor state.
#[derive(Debug, Default)]
pub struct LineBuffer {
    // === Text and cursor ===
    content: Vec<u8>,
    point: usize,

    // === Selection and modifiers ===
    pub region: Region,
    pub prefix: PrefixArgument,
    pub last_key: Option<KeySequence>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to a blank line, ready for the next read session.
    pub fn reset(&mut self) {
        self.content.clear();
        self.point = 0;
        self.region = Region::default();
        self.prefix.reset();
        self.last_key = None;
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn point(&self) -> usize {
        self.point
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// The line as text. Bytes that are not valid UTF-8 are replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Replace `content[start..end]` with `bytes`.
    ///
    /// Refuses inverted or out-of-range spans instead of panicking and
    /// reports whether the edit happened.
    fn splice(&mut self, start: usize, end: usize, bytes: &[u8]) -> bool {
        if start > end || end > self.content.len() {
            return false;
        }
        self.content.splice(start..end, bytes.iter().copied());
        true
    }

    // === Insertion and deletion ===

    /// Insert one byte at point and advance past it.
    ///
    /// When pairing is enabled and the byte opens a recognized pair,
    /// the matching close is spliced in right after point, so the
    /// cursor ends up between the two.
    pub fn insert(&mut self, byte: u8, config: &EditorConfig) {
        self.splice(self.point, self.point, &[byte]);
        self.point += 1;
        if config.pairing {
            if let Some(close) = closing_delimiter(byte, config.angle_pairs) {
                self.splice(self.point, self.point, &[close]);
            }
        }
    }

    /// Remove the byte before point.
    ///
    /// An empty pair straddling point is removed as a unit, which makes
    /// deleting right after a paired insert restore the buffer exactly.
    pub fn delete_backward_char(&mut self, config: &EditorConfig) {
        if self.point == 0 {
            return;
        }
        let before = self.content[self.point - 1];
        let empty_pair = config.pairing
            && self.point < self.content.len()
            && closing_delimiter(before, config.angle_pairs) == Some(self.content[self.point]);
        if empty_pair {
            self.splice(self.point - 1, self.point + 1, &[]);
        } else {
            self.splice(self.point - 1, self.point, &[]);
        }
        self.point -= 1;
    }

    /// Remove the byte at point. No-op at end of buffer.
    pub fn delete_char(&mut self) {
        if self.point >= self.content.len() {
            return;
        }
        self.splice(self.point, self.point + 1, &[]);
    }

    /// Insert a newline at point without moving past it.
    pub fn open_line(&mut self) {
        self.splice(self.point, self.point, b"\n");
    }

    /// Empty the buffer and drop the region. Leaves the prefix
    /// argument and kill ring alone.
    pub fn clear_line(&mut self) {
        self.content.clear();
        self.point = 0;
        self.region.active = false;
    }

    // === Point motion ===

    /// Move point forward by the effective prefix argument, clamped to
    /// the buffer edges. A negative argument moves backward.
    pub fn forward_char(&mut self) {
        self.move_point_by(i64::from(self.prefix.effective()));
    }

    /// Move point backward by the effective prefix argument, clamped
    /// to the buffer edges. A negative argument moves forward.
    pub fn backward_char(&mut self) {
        self.move_point_by(-i64::from(self.prefix.effective()));
    }

    pub fn move_beginning_of_line(&mut self) {
        self.point = 0;
    }

    pub fn move_end_of_line(&mut self) {
        self.point = self.content.len();
    }

    fn move_point_by(&mut self, delta: i64) {
        let target = self.point as i64 + delta;
        self.point = target.clamp(0, self.content.len() as i64) as usize;
    }

    // === Region ===

    /// Drop the mark at point and activate the region.
    pub fn set_mark(&mut self) {
        self.region.mark = self.point;
        self.region.active = true;
    }

    #[cfg(test)]
    pub(crate) fn set_point(&mut self, point: usize) {
        assert!(point <= self.content.len());
        self.point = point;
    }
}

/// Matching close for a pairing open byte, honoring the angle-bracket
/// configuration gate.
fn closing_delimiter(open: u8, angle_pairs: bool) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' if angle_pairs => Some(b'>'),
        _ => None,
    }
}

#[cfg(test)]
pub(crate) fn buffer_with(text: &str) -> LineBuffer {
    let mut buffer = LineBuffer::new();
    let config = EditorConfig {
        pairing: false,
        ..EditorConfig::default()
    };
    for byte in text.bytes() {
        buffer.insert(byte, &config);
    }
    buffer
}
