//! Kill and yank operations.
//!
//! Kills push the removed text onto the [`KillRing`], which mirrors it
//! to the system clipboard. Yank reads the clipboard back, so killed
//! text round-trips through the clipboard rather than the ring.

use super::word::next_word_span;
use super::LineBuffer;
use crate::clipboard::Clipboard;
use crate::editor::EditorConfig;
use crate::killring::KillRing;

impl LineBuffer {
    /// Remove the region between mark and point and push it to the
    /// kill ring.
    ///
    /// No-op when the region is inactive or empty. A mark left beyond
    /// the current buffer length is stale; the region is deactivated
    /// without touching the text.
    pub fn kill_region(&mut self, ring: &mut KillRing, clipboard: &Clipboard) {
        if !self.region.active || self.region.mark == self.point {
            return;
        }
        let (start, end) = if self.region.mark < self.point {
            (self.region.mark, self.point)
        } else {
            (self.point, self.region.mark)
        };
        if end > self.content.len() {
            self.region.active = false;
            return;
        }

        let text = String::from_utf8_lossy(&self.content[start..end]).into_owned();
        ring.push(&text, clipboard);
        self.splice(start, end, &[]);
        self.point = start;
        self.region.active = false;
    }

    /// Kill from point to the end of the buffer. No-op at the end.
    pub fn kill_line(&mut self, ring: &mut KillRing, clipboard: &Clipboard) {
        if self.point >= self.content.len() {
            return;
        }
        let text = String::from_utf8_lossy(&self.content[self.point..]).into_owned();
        ring.push(&text, clipboard);
        self.content.truncate(self.point);
    }

    /// Kill from point through the end of the next word, including any
    /// non-word bytes leading up to it. No-op when nothing follows.
    pub fn kill_word(&mut self, ring: &mut KillRing, clipboard: &Clipboard) {
        let (_, end) = next_word_span(&self.content, self.point);
        if end == self.point {
            return;
        }
        let text = String::from_utf8_lossy(&self.content[self.point..end]).into_owned();
        ring.push(&text, clipboard);
        self.splice(self.point, end, &[]);
    }

    /// Insert the current clipboard text at point, `arg` times.
    ///
    /// The text goes in verbatim; no delimiter pairing applies. With
    /// yank marking enabled the mark is set where insertion began, so
    /// the yanked span becomes the region. No-op when the clipboard is
    /// empty or the argument is not positive.
    pub fn yank(&mut self, clipboard: &Clipboard, config: &EditorConfig) {
        let arg = self.prefix.effective();
        if arg <= 0 {
            return;
        }
        let text = match clipboard.read() {
            Some(text) if !text.is_empty() => text,
            _ => return,
        };

        if config.yank_marking {
            self.region.mark = self.point;
            self.region.active = true;
        }
        for _ in 0..arg {
            self.splice(self.point, self.point, text.as_bytes());
            self.point += text.len();
        }
    }
}
