//! Command Channel
//!
//! Serializes commands onto the stream and retrieves single-line responses.

use std::io::Write;

use crate::error::Result;
use crate::network::{LineReader, Transport};
use crate::protocol::{Command, ServerResponse};

/// Request/response channel over one blocking transport.
///
/// The protocol has no correlation ids: the channel assumes strict
/// request/response ordering. Exactly one [`send`](Self::send) must be
/// followed by exactly one [`await_response`](Self::await_response) before
/// the next command goes out. Pipelining is undefined behavior and callers
/// must not attempt it.
pub struct CommandChannel<S: Transport> {
    /// The transport, wrapped for line-at-a-time reads
    stream: LineReader<S>,
}

impl<S: Transport> CommandChannel<S> {
    /// Wrap an established transport
    pub fn new(stream: S) -> Self {
        Self {
            stream: LineReader::new(stream),
        }
    }

    /// Write one command line to the stream.
    ///
    /// The encoded line is written in a single call; any write failure is
    /// fatal to the current operation. Partial writes are not retried or
    /// resumed.
    pub fn send(&mut self, command: &Command) -> Result<()> {
        let line = command.encode();
        tracing::trace!("-> {}", line.trim_end());

        let stream = self.stream.get_mut();
        stream.write_all(line.as_bytes())?;
        stream.flush()?;
        Ok(())
    }

    /// Block until the server's single-line response arrives
    pub fn await_response(&mut self) -> Result<ServerResponse> {
        let line = self.stream.read_line()?;
        tracing::trace!("<- {}", line);
        Ok(ServerResponse::new(line))
    }

    /// Read one raw byte from the stream.
    ///
    /// Used by inbox retrieval, which drains a multi-line payload below the
    /// line-framing layer.
    pub fn read_byte(&mut self) -> Result<u8> {
        self.stream.read_byte()
    }

    /// Close the underlying transport for both directions
    pub fn close(&mut self) -> Result<()> {
        self.stream.get_mut().close()?;
        Ok(())
    }
}
