//! Kill ring.
//!
//! Fixed-capacity ring of killed text fragments. Every push also
//! mirrors the text to the system clipboard; yank reads the clipboard
//! rather than this ring, so the ring itself is local history.

use tracing::trace;

use crate::clipboard::Clipboard;

/// Ring slots kept when no explicit capacity is configured.
pub const DEFAULT_KILL_RING_CAPACITY: usize = 10;

/// Circular store of killed text, oldest entry overwritten first.
#[derive(Debug, Clone)]
pub struct KillRing {
    entries: Vec<String>,
    capacity: usize,
    write_index: usize,
}

impl KillRing {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_KILL_RING_CAPACITY)
    }

    /// Ring with the given number of slots. Capacity is clamped to at
    /// least one so a push always lands somewhere.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            write_index: 0,
        }
    }

    /// Store `text` in the next slot and mirror it to the clipboard.
    ///
    /// Empty text is discarded. Once the ring is full the oldest entry
    /// is overwritten.
    pub fn push(&mut self, text: &str, clipboard: &Clipboard) {
        if text.is_empty() {
            return;
        }
        if self.entries.len() < self.capacity {
            self.entries.push(text.to_string());
        } else {
            self.entries[self.write_index] = text.to_string();
        }
        self.write_index = (self.write_index + 1) % self.capacity;
        trace!(bytes = text.len(), slot = self.write_index, "kill ring push");

        clipboard.write(text);
    }

    /// The most recently pushed text, if any.
    pub fn most_recent(&self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = (self.write_index + self.capacity - 1) % self.capacity;
        self.entries.get(index).map(String::as_str)
    }

    /// Ring slots in storage order, not chronological order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KillRing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::memory_clipboard;

    #[test]
    fn push_stores_and_mirrors_to_clipboard() {
        let (clipboard, state) = memory_clipboard();
        let mut ring = KillRing::new();

        ring.push("hello", &clipboard);

        assert_eq!(ring.most_recent(), Some("hello"));
        assert_eq!(*state.written.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[test]
    fn empty_text_is_discarded() {
        let (clipboard, state) = memory_clipboard();
        let mut ring = KillRing::new();

        ring.push("", &clipboard);

        assert!(ring.is_empty());
        assert_eq!(ring.most_recent(), None);
        assert!(state.written.lock().unwrap().is_empty());
    }

    #[test]
    fn full_ring_overwrites_the_oldest_entry() {
        let clipboard = Clipboard::disabled();
        let mut ring = KillRing::with_capacity(3);

        for text in ["a", "b", "c", "d"] {
            ring.push(text, &clipboard);
        }

        assert_eq!(ring.len(), 3);
        assert_eq!(ring.most_recent(), Some("d"));
        assert_eq!(ring.entries(), ["d", "b", "c"]);
    }

    #[test]
    fn most_recent_tracks_every_push_across_the_wrap() {
        let clipboard = Clipboard::disabled();
        let mut ring = KillRing::with_capacity(2);

        for text in ["one", "two", "three", "four", "five"] {
            ring.push(text, &clipboard);
            assert_eq!(ring.most_recent(), Some(text));
        }
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let clipboard = Clipboard::disabled();
        let mut ring = KillRing::with_capacity(0);

        assert_eq!(ring.capacity(), 1);
        ring.push("first", &clipboard);
        ring.push("second", &clipboard);
        assert_eq!(ring.len(), 1);
        assert_eq!(ring.most_recent(), Some("second"));
    }
}
