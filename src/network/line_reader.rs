//! Line Reader
//!
//! Decodes one logical line at a time from a blocking byte stream.

use std::io::{ErrorKind, Read};

use crate::error::Result;

/// Reads newline-terminated lines from a byte stream.
///
/// Bytes are consumed one at a time: `\n` terminates the line, `\r` is
/// discarded as if it were never present, everything else is accumulated.
/// There is no line-length bound — a peer that never sends `\n` blocks the
/// caller indefinitely. That is an accepted property of the protocol, not
/// something to cap here.
pub struct LineReader<S> {
    inner: S,
}

impl<S: Read> LineReader<S> {
    /// Wrap a byte stream
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Read a single byte, blocking until one is available.
    ///
    /// A read of zero bytes means the peer closed the stream, which is
    /// surfaced as an `UnexpectedEof` transport error.
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => {
                    return Err(std::io::Error::new(
                        ErrorKind::UnexpectedEof,
                        "stream closed mid-read",
                    )
                    .into());
                }
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Read one full line, excluding the `\n` terminator.
    ///
    /// Blocks until a terminator arrives or the stream closes/errors.
    /// The protocol is ASCII; bytes above 0x7F are taken as Latin-1 code
    /// points rather than decoded as UTF-8.
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        loop {
            match self.read_byte()? {
                b'\n' => return Ok(line),
                b'\r' => {}
                byte => line.push(byte as char),
            }
        }
    }

    /// Access the underlying stream (used by the channel for writes)
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consume the reader and return the underlying stream
    pub fn into_inner(self) -> S {
        self.inner
    }
}
