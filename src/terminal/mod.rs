//! Terminal access.
//!
//! Two concerns live here: putting the controlling terminal into raw
//! (non-canonical, non-echo) mode for the duration of a read session,
//! and the byte-at-a-time input source the editor loop consumes.
//! Raw mode is scoped by an RAII guard so every exit path restores the
//! previous settings.

mod source;

pub use source::{ByteSource, StdinByteSource};

#[cfg(test)]
pub(crate) use source::{ScriptedSource, Step};

use std::io;

use crossterm::terminal;
use tracing::{debug, trace};

/// Scoped raw-mode acquisition.
///
/// When stdin is not a terminal (piped input, tests) the guard is
/// inert: nothing is changed and nothing needs restoring.
#[derive(Debug)]
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// Enter raw mode until the guard is dropped.
    pub fn acquire() -> io::Result<Self> {
        if !atty::is(atty::Stream::Stdin) {
            debug!("stdin is not a tty, raw mode skipped");
            return Ok(Self { active: false });
        }
        terminal::enable_raw_mode()?;
        trace!("raw mode enabled");
        Ok(Self { active: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = terminal::disable_raw_mode() {
                debug!(?err, "failed to restore terminal mode");
            } else {
                trace!("raw mode restored");
            }
        }
    }
}
