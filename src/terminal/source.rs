//! Byte-at-a-time input sources.
//!
//! The editor loop needs exactly two read shapes: block until the next
//! byte, and wait for a byte only until a deadline (escape-sequence
//! disambiguation). Both live behind [`ByteSource`] so the loop can be
//! driven by a scripted source in tests.

use std::io;
use std::time::Instant;

/// Blocking byte input with an optional deadline.
pub trait ByteSource {
    /// Block until one byte arrives. `None` means end of stream.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Wait for one byte until `deadline`. `None` means the deadline
    /// passed or the stream ended.
    fn read_byte_deadline(&mut self, deadline: Instant) -> io::Result<Option<u8>>;
}

/// The process's standard input as a byte source.
///
/// Reads the file descriptor directly rather than through the buffered
/// [`std::io::Stdin`] handle: buffering would swallow the bytes the
/// deadline read needs to see one at a time.
#[derive(Debug, Default)]
pub struct StdinByteSource;

impl StdinByteSource {
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for StdinByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        read_one(libc::STDIN_FILENO)
    }

    fn read_byte_deadline(&mut self, deadline: Instant) -> io::Result<Option<u8>> {
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            let remaining = deadline - now;
            let millis = remaining.as_millis().clamp(1, i32::MAX as u128) as i32;
            match poll_readable(libc::STDIN_FILENO, millis) {
                Ok(true) => return read_one(libc::STDIN_FILENO),
                Ok(false) => return Ok(None),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

/// One blocking read of a single byte, retrying on EINTR.
fn read_one(fd: libc::c_int) -> io::Result<Option<u8>> {
    let mut byte = 0u8;
    loop {
        let n = unsafe { libc::read(fd, (&mut byte as *mut u8).cast(), 1) };
        if n < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }
        return Ok(if n == 0 { None } else { Some(byte) });
    }
}

/// Poll the descriptor for readability within `timeout_ms`.
fn poll_readable(fd: libc::c_int, timeout_ms: i32) -> io::Result<bool> {
    let mut fds = libc::pollfd {
        fd,
        events: libc::POLLIN,
        revents: 0,
    };
    let n = unsafe { libc::poll(&mut fds, 1 as libc::nfds_t, timeout_ms) };
    if n < 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(n > 0)
}

#[cfg(test)]
pub(crate) use scripted::{ScriptedSource, Step};
