//! # chatlink
//!
//! A synchronous, line-oriented TCP chat client with:
//! - A three-state authorization state machine (disconnected / connected / authorized)
//! - A strict request/response command channel over one blocking stream
//! - Byte-at-a-time line framing with `\r` stripped
//! - Multi-part inbox payloads drained inline from the same stream
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Menu Loop / Dispatcher                      │
//! │              (presentation, free-text input)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ state-gated calls
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Session                                │
//! │        (state machine + protocol operations)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ request/response
//!               ┌───────▼────────┐
//!               │ CommandChannel │
//!               └───────┬────────┘
//!                       │ one line at a time
//!               ┌───────▼────────┐
//!               │   LineReader   │
//!               └───────┬────────┘
//!                       │ raw bytes
//!               ┌───────▼────────┐
//!               │   TcpStream    │
//!               └────────────────┘
//! ```
//!
//! The protocol is strictly synchronous: one command, then one response,
//! with no pipelining, no timeouts, and no background reader. A peer that
//! never answers blocks the caller until the stream is closed.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod network;
pub mod protocol;
pub mod session;
pub mod actions;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ChatError, Result};
pub use config::Config;
pub use session::{Session, SessionState};
pub use actions::Action;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of chatlink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
