//! Word-boundary scanning and word motion.

use super::LineBuffer;
use crate::editor::EditorConfig;

/// Word bytes are ASCII alphanumerics and underscore.
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Span of the next word at or after `from`: leading non-word bytes
/// are skipped, then word bytes are consumed. Start and end are equal
/// when no word remains.
pub(super) fn next_word_span(content: &[u8], from: usize) -> (usize, usize) {
    let mut start = from;
    while start < content.len() && !is_word_byte(content[start]) {
        start += 1;
    }
    let mut end = start;
    while end < content.len() && is_word_byte(content[end]) {
        end += 1;
    }
    (start, end)
}

/// Span of the word just before `from`, scanning backward over
/// trailing non-word bytes first. Start and end are equal when no word
/// precedes `from`.
pub(super) fn prev_word_span(content: &[u8], from: usize) -> (usize, usize) {
    let mut end = from;
    while end > 0 && !is_word_byte(content[end - 1]) {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && is_word_byte(content[start - 1]) {
        start -= 1;
    }
    (start, end)
}

impl LineBuffer {
    /// Move forward by `abs(arg)` words, backward when the argument is
    /// negative.
    ///
    /// With word marking enabled the region ends up bracketing the
    /// word point landed in.
    pub fn forward_word(&mut self, config: &EditorConfig) {
        let arg = self.prefix.effective();
        let count = arg.unsigned_abs() as usize;
        if arg >= 0 {
            self.forward_words(count, config);
        } else {
            self.backward_words(count, config);
        }
    }

    /// Move backward by `abs(arg)` words, forward when the argument is
    /// negative.
    pub fn backward_word(&mut self, config: &EditorConfig) {
        let arg = self.prefix.effective();
        let count = arg.unsigned_abs() as usize;
        if arg >= 0 {
            self.backward_words(count, config);
        } else {
            self.forward_words(count, config);
        }
    }

    fn forward_words(&mut self, count: usize, config: &EditorConfig) {
        let mut traversed_start = None;
        for _ in 0..count {
            let (start, end) = next_word_span(&self.content, self.point);
            if end == self.point {
                break;
            }
            self.point = end;
            traversed_start = Some(start);
        }
        if config.word_marking {
            if let Some(mark) = traversed_start {
                self.region.mark = mark;
                self.region.active = true;
            }
        }
    }

    fn backward_words(&mut self, count: usize, config: &EditorConfig) {
        let mut traversed_end = None;
        for _ in 0..count {
            let (start, end) = prev_word_span(&self.content, self.point);
            if start == self.point {
                break;
            }
            self.point = start;
            traversed_end = Some(end);
        }
        if config.word_marking {
            if let Some(mark) = traversed_end {
                self.region.mark = mark;
                self.region.active = true;
            }
        }
    }
}
