//! The read-line session.
//!
//! [`Editor`] ties the pieces together: it pulls bytes from a
//! [`ByteSource`], assembles escape sequences under a short
//! disambiguation window, resolves keys through the [`KeyMap`],
//! mutates the [`LineBuffer`], and re-renders after every keystroke.
//! One call to [`Editor::read_line`] is one session: raw mode is held
//! for its duration and the buffer starts fresh.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::buffer::LineBuffer;
use crate::clipboard::Clipboard;
use crate::error::EditorError;
use crate::key::{Action, KeyMap, KeySequence, MAX_SEQUENCE_BYTES};
use crate::killring::{KillRing, DEFAULT_KILL_RING_CAPACITY};
use crate::render::RenderEngine;
use crate::terminal::{ByteSource, RawModeGuard, StdinByteSource};

const ESC: u8 = 0x1b;
const CTRL_D: u8 = 0x04;

/// How long a lone escape byte may wait for trailing sequence bytes.
const ESCAPE_TIMEOUT: Duration = Duration::from_millis(10);

/// Tunable editing behavior.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Text printed before the editable content.
    pub prompt: String,
    /// Auto-insert the matching close for `(`, `[` and `{`.
    pub pairing: bool,
    /// Extend pairing to `<` as well.
    pub angle_pairs: bool,
    /// Word motion marks the word it lands in.
    pub word_marking: bool,
    /// Yank marks the span it inserted.
    pub yank_marking: bool,
    /// Show `(arg: N)` while a prefix argument accumulates.
    pub arg_display: bool,
    /// Kill ring slots.
    pub kill_ring_capacity: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            pairing: true,
            angle_pairs: false,
            word_marking: false,
            yank_marking: true,
            arg_display: true,
            kill_ring_capacity: DEFAULT_KILL_RING_CAPACITY,
        }
    }
}

/// What a read session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Enter was pressed; the line's content.
    Line(String),
    /// The session ended with no more input.
    Eof,
}

/// An interactive line editor over a byte source and an output sink.
pub struct Editor<S: ByteSource, W: Write> {
    source: S,
    out: W,
    buffer: LineBuffer,
    keymap: KeyMap,
    kill_ring: KillRing,
    clipboard: Clipboard,
    renderer: RenderEngine,
    config: EditorConfig,
    manage_terminal: bool,
}

impl Editor<StdinByteSource, io::Stdout> {
    /// Editor over the process terminal with the standard key map.
    pub fn new(config: EditorConfig) -> Result<Self, EditorError> {
        let keymap = KeyMap::standard()?;
        let mut editor = Self::with_io(
            StdinByteSource::new(),
            io::stdout(),
            keymap,
            Clipboard::new(),
            config,
        );
        editor.manage_terminal = true;
        Ok(editor)
    }
}

impl<S: ByteSource, W: Write> Editor<S, W> {
    /// Editor over explicit collaborators (for testing and embedding).
    ///
    /// The caller owns terminal setup; no raw-mode switching happens.
    pub fn with_io(
        source: S,
        out: W,
        keymap: KeyMap,
        clipboard: Clipboard,
        config: EditorConfig,
    ) -> Self {
        let kill_ring = KillRing::with_capacity(config.kill_ring_capacity);
        Self {
            source,
            out,
            buffer: LineBuffer::new(),
            keymap,
            kill_ring,
            clipboard,
            renderer: RenderEngine::new(),
            config,
            manage_terminal: false,
        }
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyMap {
        &mut self.keymap
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Run one read session until Enter or end of input.
    pub fn read_line(&mut self) -> Result<ReadOutcome, EditorError> {
        let _guard = if self.manage_terminal {
            Some(RawModeGuard::acquire()?)
        } else {
            None
        };

        self.buffer.reset();
        self.renderer
            .render_plain(&mut self.out, &self.config.prompt, &self.buffer)?;

        loop {
            let key = match self.next_key()? {
                Some(key) => key,
                None => return self.finish_session(),
            };
            self.buffer.last_key = Some(key);

            if key.len() == 1 && key.first() == CTRL_D && self.buffer.is_empty() {
                debug!("end of session requested");
                return self.finish_session();
            }

            if let Some(action) = self.keymap.lookup(&key) {
                self.dispatch(action);
                if !matches!(action, Action::DigitArgument | Action::KeyboardQuit) {
                    self.buffer.prefix.reset();
                }
            } else if key.len() == 1 {
                let byte = key.first();
                if byte == b'\r' || byte == b'\n' {
                    return self.finish_line();
                } else if byte.is_ascii_graphic() || byte == b' ' {
                    self.buffer.insert(byte, &self.config);
                    self.buffer.prefix.reset();
                } else {
                    trace!(byte, "ignoring unbound byte");
                }
            } else {
                trace!(key = ?key, "ignoring unbound sequence");
            }

            if self.buffer.prefix.is_building() && self.config.arg_display {
                let arg = self.buffer.prefix.effective();
                self.renderer
                    .render_with_argument(&mut self.out, &self.config.prompt, &self.buffer, arg)?;
            } else {
                self.renderer
                    .render_plain(&mut self.out, &self.config.prompt, &self.buffer)?;
            }
        }
    }

    /// Accept the buffer as the session's line.
    fn finish_line(&mut self) -> Result<ReadOutcome, EditorError> {
        self.renderer.finish(&mut self.out)?;
        let text = self.buffer.text();
        debug!(bytes = text.len(), "line accepted");
        Ok(ReadOutcome::Line(text))
    }

    /// The input stream ended. A partial line is still worth
    /// returning; only an empty buffer signals end of session.
    fn finish_session(&mut self) -> Result<ReadOutcome, EditorError> {
        if self.buffer.is_empty() {
            self.renderer.finish(&mut self.out)?;
            Ok(ReadOutcome::Eof)
        } else {
            self.finish_line()
        }
    }

    fn dispatch(&mut self, action: Action) {
        debug!(action = %action, "dispatch");
        match action {
            Action::MoveBeginningOfLine => self.buffer.move_beginning_of_line(),
            Action::MoveEndOfLine => self.buffer.move_end_of_line(),
            Action::BackwardChar => self.buffer.backward_char(),
            Action::ForwardChar => self.buffer.forward_char(),
            Action::ForwardWord => self.buffer.forward_word(&self.config),
            Action::BackwardWord => self.buffer.backward_word(&self.config),
            Action::DeleteChar => self.buffer.delete_char(),
            Action::DeleteBackwardChar => self.buffer.delete_backward_char(&self.config),
            Action::SetMark => self.buffer.set_mark(),
            Action::KillRegion => self.buffer.kill_region(&mut self.kill_ring, &self.clipboard),
            Action::KillLine => self.buffer.kill_line(&mut self.kill_ring, &self.clipboard),
            Action::KillWord => self.buffer.kill_word(&mut self.kill_ring, &self.clipboard),
            Action::Yank => self.buffer.yank(&self.clipboard, &self.config),
            Action::OpenLine => self.buffer.open_line(),
            Action::ClearLine => self.buffer.clear_line(),
            Action::DigitArgument => self.digit_argument(),
            Action::KeyboardQuit => {
                self.buffer.prefix.reset();
                self.renderer.force_full_redraw();
            }
        }
    }

    /// Fold the digit or sign carried by the key that triggered the
    /// action into the prefix argument.
    fn digit_argument(&mut self) {
        let Some(key) = self.buffer.last_key else {
            return;
        };
        let bytes = key.as_bytes();
        let byte = match bytes {
            [b] => *b,
            [ESC, b] => *b,
            _ => return,
        };
        match byte {
            b'0'..=b'9' => self.buffer.prefix.push_digit(byte - b'0'),
            b'-' => self.buffer.prefix.negate(),
            _ => {}
        }
    }

    /// Read and classify the next key, dropping unclassifiable bursts.
    /// `None` means the input stream ended.
    fn next_key(&mut self) -> Result<Option<KeySequence>, EditorError> {
        loop {
            let first = match self.source.read_byte()? {
                Some(byte) => byte,
                None => return Ok(None),
            };
            let bytes = if first == ESC {
                match self.assemble_escape()? {
                    Some(bytes) => bytes,
                    None => return Ok(None),
                }
            } else {
                vec![first]
            };
            match KeySequence::from_bytes(&bytes) {
                Ok(key) => return Ok(Some(key)),
                Err(err) => {
                    trace!(?err, "ignoring unclassifiable byte sequence");
                }
            }
        }
    }

    /// Drain the bytes following an escape within one shared deadline.
    ///
    /// A lone escape is a pending Meta modifier: the next byte is
    /// awaited without a deadline and composed with it. `None` means
    /// the stream ended during that wait.
    fn assemble_escape(&mut self) -> Result<Option<Vec<u8>>, EditorError> {
        let mut bytes = vec![ESC];
        let deadline = Instant::now() + ESCAPE_TIMEOUT;
        while bytes.len() < MAX_SEQUENCE_BYTES {
            match self.source.read_byte_deadline(deadline)? {
                Some(byte) => bytes.push(byte),
                None => break,
            }
        }

        // The delete key's closing ~ may trail the window when its
        // three lead bytes arrive right at the edge.
        if bytes == [ESC, b'[', b'3'] {
            let grace = Instant::now() + ESCAPE_TIMEOUT;
            if let Some(byte) = self.source.read_byte_deadline(grace)? {
                bytes.push(byte);
            }
        }

        if bytes.len() == 1 {
            trace!("lone escape, treating as pending meta");
            return Ok(self.source.read_byte()?.map(|byte| vec![ESC, byte]));
        }
        Ok(Some(bytes))
    }
}
