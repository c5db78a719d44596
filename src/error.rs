//! Error types for chatlink
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::session::SessionState;

/// Result type alias using ChatError
pub type Result<T> = std::result::Result<T, ChatError>;

/// Unified error type for chatlink operations
#[derive(Debug, Error)]
pub enum ChatError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Socket-level failure: connect refused, write failed, stream closed
    /// mid-read. Never retried automatically.
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // State Machine Errors
    // -------------------------------------------------------------------------
    /// Operation invoked while the session is not in one of its valid states.
    /// Raised before any network I/O happens.
    #[error("operation '{operation}' is not available in state {state:?}")]
    InvalidState {
        /// Name of the rejected operation
        operation: &'static str,
        /// State the session was in at the time of the call
        state: SessionState,
    },

    // -------------------------------------------------------------------------
    // Input Validation Errors
    // -------------------------------------------------------------------------
    /// Locally detected malformed input, caught before any network round-trip.
    #[error("invalid input: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// A response did not match the expected shape (e.g. non-numeric inbox
    /// count). Carries the raw offending text for diagnostics.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The server answered a command with something other than its success
    /// pattern. The raw response text is the server's own error vocabulary
    /// and is surfaced verbatim.
    #[error("server rejected '{command}': {reason}")]
    Rejected {
        /// Command that was rejected
        command: &'static str,
        /// Raw response line from the server
        reason: String,
    },
}
