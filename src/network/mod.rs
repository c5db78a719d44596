//! Network Module
//!
//! Blocking byte-stream transport and line-oriented framing.
//!
//! ## Architecture
//! - Single connection, single thread of control
//! - Byte-at-a-time line reads, `\r` discarded
//! - Strict request/response ordering, no pipelining

mod channel;
mod line_reader;

pub use channel::CommandChannel;
pub use line_reader::LineReader;

use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};

/// Bidirectional byte stream the client runs over.
///
/// The one production implementation is [`TcpStream`]; tests substitute
/// in-memory streams. `close` is the seam for an orderly shutdown — the
/// default is a no-op because dropping an in-memory stream releases
/// everything it holds.
pub trait Transport: Read + Write {
    /// Close the stream for both directions.
    fn close(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Transport for TcpStream {
    fn close(&mut self) -> std::io::Result<()> {
        self.shutdown(Shutdown::Both)
    }
}
