//! Session Module
//!
//! The three-state authorization lifecycle and the connection it owns.
//!
//! ## State machine
//!
//! ```text
//!                connect              login
//! Disconnected ──────────▶ Connected ───────▶ Authorized
//!      ▲                       │                   │
//!      └───────────────────────┴─── disconnect ────┘
//! ```
//!
//! Every operation is state-gated: invoking it outside its valid-state set
//! is rejected with [`ChatError::InvalidState`] before any network I/O.
//! The connection exists exactly while the state is not `Disconnected`.

mod ops;

use std::net::TcpStream;

use crate::config::Config;
use crate::error::{ChatError, Result};
use crate::network::{CommandChannel, Transport};
use crate::protocol::{Command, ServerResponse};

/// Authorization state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No connection to a chat server
    Disconnected,

    /// Connected to a chat server, but not logged in
    Connected,

    /// Connected and logged in
    Authorized,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Disconnected => "disconnected",
            SessionState::Connected => "connected",
            SessionState::Authorized => "authorized",
        };
        f.write_str(name)
    }
}

/// States from which any online exchange may run
pub const CONNECTED_STATES: &[SessionState] =
    &[SessionState::Connected, SessionState::Authorized];

/// States from which private messaging may run
pub const AUTHORIZED_STATES: &[SessionState] = &[SessionState::Authorized];

/// One chat session: current state plus the channel it owns.
///
/// There are no process-wide singletons here; independent sessions can
/// coexist (separate tests, separate servers) without interference. The
/// protocol is strictly synchronous, so a session is driven from a single
/// thread of control with no overlapping in-flight requests.
pub struct Session<S: Transport = TcpStream> {
    /// Current authorization state
    state: SessionState,

    /// Command channel; `Some` exactly while state != Disconnected
    channel: Option<CommandChannel<S>>,
}

impl<S: Transport> Default for Session<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Transport> Session<S> {
    /// Create a session in the `Disconnected` state
    pub fn new() -> Self {
        Self {
            state: SessionState::Disconnected,
            channel: None,
        }
    }

    /// The current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Adopt an already-established transport as the session's connection.
    ///
    /// Sets the state to `Connected` and performs the `sync` handshake, the
    /// same sequence [`Session::connect`] runs after opening a TCP stream.
    /// Valid only from `Disconnected`.
    pub fn attach(&mut self, stream: S) -> Result<()> {
        self.require_state("connect", &[SessionState::Disconnected])?;

        self.channel = Some(CommandChannel::new(stream));
        self.state = SessionState::Connected;
        self.synchronize()
    }

    /// Close the connection and return to `Disconnected`.
    ///
    /// Valid from `Connected` and `Authorized`. If the close itself fails
    /// the state is left unchanged, but the connection is in an
    /// indeterminate state and the session should be discarded.
    pub fn disconnect(&mut self) -> Result<()> {
        self.require_state("disconnect", CONNECTED_STATES)?;

        if let Some(channel) = self.channel.as_mut() {
            channel.close()?;
        }
        self.channel = None;
        self.state = SessionState::Disconnected;
        tracing::debug!("disconnected");
        Ok(())
    }

    /// Log in under `username`.
    ///
    /// Valid from `Connected` and `Authorized`. On the server's `loginok`
    /// the state becomes `Authorized`; any other response leaves the state
    /// unchanged and is surfaced verbatim as the failure reason.
    pub fn login(&mut self, username: &str) -> Result<()> {
        self.require_state("login", CONNECTED_STATES)?;

        let response = self.exchange("login", &Command::login(username))?;
        if !response.is_exactly("loginok") {
            return Err(ChatError::Rejected {
                command: "login",
                reason: response.raw().to_string(),
            });
        }

        self.state = SessionState::Authorized;
        tracing::debug!("logged in as {}", username);
        Ok(())
    }

    /// Reject the call unless the current state is in `valid`
    fn require_state(
        &self,
        operation: &'static str,
        valid: &[SessionState],
    ) -> Result<()> {
        if valid.contains(&self.state) {
            Ok(())
        } else {
            Err(ChatError::InvalidState {
                operation,
                state: self.state,
            })
        }
    }

    /// Borrow the channel, which the state gates guarantee to exist
    fn channel_mut(
        &mut self,
        operation: &'static str,
    ) -> Result<&mut CommandChannel<S>> {
        let state = self.state;
        self.channel
            .as_mut()
            .ok_or(ChatError::InvalidState { operation, state })
    }

    /// One strict request/response round-trip
    fn exchange(
        &mut self,
        operation: &'static str,
        command: &Command,
    ) -> Result<ServerResponse> {
        let channel = self.channel_mut(operation)?;
        channel.send(command)?;
        channel.await_response()
    }

    /// Issue the `sync` command and check the confirmation.
    ///
    /// The confirmation is informational only: anything other than
    /// `modeok` is logged but does not roll back the connection.
    fn synchronize(&mut self) -> Result<()> {
        let response = self.exchange("connect", &Command::sync())?;
        if response.is_exactly("modeok") {
            tracing::debug!("server confirmed synchronous mode");
        } else {
            tracing::warn!("unexpected sync response: {}", response.raw());
        }
        Ok(())
    }
}

impl Session<TcpStream> {
    /// Open a TCP connection to the configured server.
    ///
    /// Valid only from `Disconnected`. On success the state becomes
    /// `Connected` and the `sync` handshake runs; if the stream cannot be
    /// opened the state remains `Disconnected` and the transport error is
    /// surfaced.
    pub fn connect(&mut self, config: &Config) -> Result<()> {
        self.require_state("connect", &[SessionState::Disconnected])?;

        let address = config.address();
        tracing::debug!("connecting to {}", address);
        let stream = TcpStream::connect(address.as_str())?;

        // Disable Nagle's algorithm: the protocol is one short line per
        // round-trip, latency matters more than throughput.
        stream.set_nodelay(true)?;

        self.attach(stream)
    }
}
