//! Response definitions
//!
//! Represents single-line responses from the chat server.

/// One decoded response line.
///
/// The first whitespace-delimited token is conventionally a status or
/// command-echo keyword; the remainder is the payload. Responses are
/// transient and consumed immediately by the calling operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    line: String,
}

impl ServerResponse {
    /// Wrap a decoded response line
    pub fn new(line: String) -> Self {
        Self { line }
    }

    /// The whole raw line, as received (terminator stripped)
    pub fn raw(&self) -> &str {
        &self.line
    }

    /// The first whitespace-delimited token, or `""` for an empty line
    pub fn status(&self) -> &str {
        self.line.split_whitespace().next().unwrap_or("")
    }

    /// All tokens after the status token, in order
    pub fn payload_tokens(&self) -> Vec<&str> {
        self.line.split_whitespace().skip(1).collect()
    }

    /// The payload tokens rejoined with single spaces
    pub fn payload_text(&self) -> String {
        self.payload_tokens().join(" ")
    }

    /// Whether the line equals `keyword` exactly (no payload allowed)
    pub fn is_exactly(&self, keyword: &str) -> bool {
        self.line == keyword
    }

    /// Whether the response matches the message-acknowledgement pattern:
    /// status token `msgok` followed by a numeric message id.
    pub fn is_message_ack(&self) -> bool {
        let mut tokens = self.line.split_whitespace();
        if tokens.next() != Some("msgok") {
            return false;
        }
        match tokens.next() {
            Some(id) => id.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }
}
