//! Protocol Module
//!
//! Defines the line-oriented wire protocol spoken with the chat server.
//!
//! ## Wire Format
//!
//! ### Client -> server
//! ```text
//! {command} {argument}\n
//! ```
//! The argument is the empty string when a command takes none, which leaves
//! a trailing space before the newline. The server expects this framing, so
//! it is reproduced exactly.
//!
//! ### Commands
//! - `sync`                        - switch the connection to synchronous mode
//! - `login <username>`            - authorize under a username
//! - `msg <text>`                  - send a public message
//! - `privmsg <recipient> <text>`  - send a private message
//! - `users`                       - list connected usernames
//! - `inbox`                       - announce and stream pending messages
//! - `joke`                        - fetch a joke
//!
//! ### Server -> client
//! One `\n`-terminated line per response; `\r` bytes are ignored. The first
//! whitespace-delimited token is a status/echo keyword, the remainder is the
//! payload. After an `inbox` response announcing a count N, the server emits
//! N additional raw lines of the form `{public|privmsg} {sender} {body...}`.

mod command;
mod inbox;
mod response;

pub use command::Command;
pub use inbox::{Inbox, InboxMessage, MessageKind};
pub use response::ServerResponse;
