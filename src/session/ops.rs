//! Protocol operations
//!
//! The higher-level exchanges a session offers once connected. Each is one
//! or more strict request/response round-trips; none retries, none is
//! idempotent, and a transport failure aborts the operation outright.

use super::{Session, AUTHORIZED_STATES, CONNECTED_STATES};
use crate::error::{ChatError, Result};
use crate::network::Transport;
use crate::protocol::{Command, Inbox};

impl<S: Transport> Session<S> {
    /// Send a public message.
    ///
    /// Valid from `Connected` and `Authorized`. Success is the server's
    /// `msgok <id>` acknowledgement; any other response is surfaced
    /// verbatim as the failure detail.
    pub fn send_public_message(&mut self, text: &str) -> Result<()> {
        self.require_state("msg", CONNECTED_STATES)?;

        let response = self.exchange("msg", &Command::public_message(text))?;
        if !response.is_message_ack() {
            return Err(ChatError::Rejected {
                command: "msg",
                reason: response.raw().to_string(),
            });
        }
        Ok(())
    }

    /// Send a private message to `recipient`.
    ///
    /// Valid from `Authorized` only. An empty recipient or message fails
    /// locally with a validation error before anything touches the wire.
    pub fn send_private_message(&mut self, recipient: &str, text: &str) -> Result<()> {
        if recipient.is_empty() {
            return Err(ChatError::Validation("recipient must not be empty".to_string()));
        }
        if text.is_empty() {
            return Err(ChatError::Validation("message must not be empty".to_string()));
        }
        self.require_state("privmsg", AUTHORIZED_STATES)?;

        let response =
            self.exchange("privmsg", &Command::private_message(recipient, text))?;
        if !response.is_message_ack() {
            return Err(ChatError::Rejected {
                command: "privmsg",
                reason: response.raw().to_string(),
            });
        }
        Ok(())
    }

    /// List currently connected usernames, in server order.
    ///
    /// Valid from `Connected` and `Authorized`. The response's first token
    /// is the command echo and is discarded.
    pub fn list_users(&mut self) -> Result<Vec<String>> {
        self.require_state("users", CONNECTED_STATES)?;

        let response = self.exchange("users", &Command::users())?;
        Ok(response
            .payload_tokens()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Retrieve all pending inbox messages.
    ///
    /// Valid from `Connected` and `Authorized`. The response announces a
    /// message count; a count of zero returns immediately with no further
    /// reads. Otherwise the announced number of raw lines is drained below
    /// the line-framing layer: bytes accumulate into one buffer, `\r` is
    /// ignored, and each `\n` closes a message — joined by `;` while more
    /// remain, then split into messages at the end.
    pub fn fetch_inbox(&mut self) -> Result<Inbox> {
        self.require_state("inbox", CONNECTED_STATES)?;

        let response = self.exchange("inbox", &Command::inbox())?;
        let count: usize = response
            .payload_tokens()
            .first()
            .and_then(|token| token.parse().ok())
            .ok_or_else(|| {
                ChatError::Protocol(format!(
                    "malformed inbox count in response {:?}",
                    response.raw()
                ))
            })?;

        tracing::debug!("inbox holds {} message(s)", count);
        if count == 0 {
            return Ok(Inbox::default());
        }

        let channel = self.channel_mut("inbox")?;
        let mut remaining = count;
        let mut buffer = String::new();
        loop {
            match channel.read_byte()? {
                b'\n' => {
                    remaining -= 1;
                    if remaining == 0 {
                        break;
                    }
                    buffer.push(';');
                }
                b'\r' => {}
                byte => buffer.push(byte as char),
            }
        }

        Inbox::from_packed(&buffer)
    }

    /// Fetch a joke from the server.
    ///
    /// Valid from `Connected` and `Authorized`. The first response token is
    /// discarded; the rest, joined by single spaces, is the joke text.
    pub fn fetch_joke(&mut self) -> Result<String> {
        self.require_state("joke", CONNECTED_STATES)?;

        let response = self.exchange("joke", &Command::joke())?;
        Ok(response.payload_text())
    }
}
