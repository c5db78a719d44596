//! Inbox payload parsing
//!
//! The `inbox` response announces a message count; the server then streams
//! that many raw lines in the same stream. The drain packs all lines into
//! one buffer joined by `;` and splits at the end — the delimiter scheme
//! depends on that two-phase shape, so it is kept rather than emitting
//! messages per line.

use crate::error::{ChatError, Result};

/// Whether an inbox message was sent publicly or privately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Public,
    Private,
}

/// One message drained from the inbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxMessage {
    /// Public or private
    pub kind: MessageKind,

    /// Username of the sender
    pub sender: String,

    /// Message text
    pub body: String,
}

/// Result of one inbox retrieval: messages partitioned by kind, each list
/// preserving arrival order. Nothing here is persisted beyond the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inbox {
    /// Private messages, in arrival order
    pub private: Vec<InboxMessage>,

    /// Public messages, in arrival order
    pub public: Vec<InboxMessage>,
}

impl Inbox {
    /// Total number of messages retrieved
    pub fn len(&self) -> usize {
        self.private.len() + self.public.len()
    }

    /// Whether the retrieval produced no messages
    pub fn is_empty(&self) -> bool {
        self.private.is_empty() && self.public.is_empty()
    }

    /// Split a packed `;`-joined payload buffer into messages.
    ///
    /// Each segment is `{kind} {sender} {body...}`: a `privmsg` kind token
    /// marks a private message, anything else is public.
    pub fn from_packed(buffer: &str) -> Result<Self> {
        let mut inbox = Inbox::default();
        for segment in buffer.split(';') {
            let message = parse_segment(segment)?;
            match message.kind {
                MessageKind::Private => inbox.private.push(message),
                MessageKind::Public => inbox.public.push(message),
            }
        }
        Ok(inbox)
    }
}

/// Parse one `{kind} {sender} {body...}` segment
fn parse_segment(segment: &str) -> Result<InboxMessage> {
    let mut tokens = segment.split_whitespace();

    let kind = match tokens.next() {
        Some("privmsg") => MessageKind::Private,
        Some(_) => MessageKind::Public,
        None => {
            return Err(ChatError::Protocol(format!(
                "empty inbox segment in payload: {segment:?}"
            )));
        }
    };

    let sender = tokens.next().ok_or_else(|| {
        ChatError::Protocol(format!("inbox segment missing sender: {segment:?}"))
    })?;

    let body = tokens.collect::<Vec<_>>().join(" ");

    Ok(InboxMessage {
        kind,
        sender: sender.to_string(),
        body,
    })
}
