//! Shared test helpers
//!
//! An in-memory scripted stream standing in for the chat server: reads come
//! from a pre-recorded script, writes land in a shared buffer the test can
//! inspect after the session has taken ownership of the stream.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Cursor, Read, Write};
use std::rc::Rc;

use chatlink::network::Transport;

/// Handle to the bytes a [`ScriptedStream`] has seen written
pub type WrittenBytes = Rc<RefCell<Vec<u8>>>;

/// Loopback-style stream with scripted server output
pub struct ScriptedStream {
    script: Cursor<Vec<u8>>,
    written: WrittenBytes,
}

impl ScriptedStream {
    /// Create a stream whose reads yield `script`, plus a handle to
    /// everything written into it
    pub fn new(script: &str) -> (Self, WrittenBytes) {
        let written = Rc::new(RefCell::new(Vec::new()));
        let stream = Self {
            script: Cursor::new(script.as_bytes().to_vec()),
            written: Rc::clone(&written),
        };
        (stream, written)
    }
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.script.read(buf)
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Transport for ScriptedStream {}

/// Scripted stream whose `close` always fails, for exercising the
/// disconnect failure path
pub struct FailingCloseStream {
    inner: ScriptedStream,
}

impl FailingCloseStream {
    pub fn new(inner: ScriptedStream) -> Self {
        Self { inner }
    }
}

impl Read for FailingCloseStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for FailingCloseStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Transport for FailingCloseStream {
    fn close(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "close failed"))
    }
}

/// Decode the written bytes as a UTF-8 string
pub fn written_text(written: &WrittenBytes) -> String {
    String::from_utf8(written.borrow().clone()).unwrap()
}
