//! Command definitions
//!
//! Represents commands sent to the chat server.

/// A single client command: a name plus an optional argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Command keyword (`sync`, `login`, `msg`, ...)
    name: &'static str,

    /// Argument string, or `None` for argument-less commands
    argument: Option<String>,
}

impl Command {
    /// `sync` - request synchronous (line-per-response) mode
    pub fn sync() -> Self {
        Self::bare("sync")
    }

    /// `login <username>`
    pub fn login(username: &str) -> Self {
        Self::with_argument("login", username.to_string())
    }

    /// `msg <text>` - public message
    pub fn public_message(text: &str) -> Self {
        Self::with_argument("msg", text.to_string())
    }

    /// `privmsg <recipient> <text>` - private message
    pub fn private_message(recipient: &str, text: &str) -> Self {
        Self::with_argument("privmsg", format!("{recipient} {text}"))
    }

    /// `users` - list connected usernames
    pub fn users() -> Self {
        Self::bare("users")
    }

    /// `inbox` - announce and stream pending messages
    pub fn inbox() -> Self {
        Self::bare("inbox")
    }

    /// `joke` - fetch a joke
    pub fn joke() -> Self {
        Self::bare("joke")
    }

    fn bare(name: &'static str) -> Self {
        Self {
            name,
            argument: None,
        }
    }

    fn with_argument(name: &'static str, argument: String) -> Self {
        Self {
            name,
            argument: Some(argument),
        }
    }

    /// The command keyword
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Encode the command as one wire line: `"{name} {argument}\n"`.
    ///
    /// A missing argument encodes as the empty string, leaving a trailing
    /// space before the newline. The server's parser relies on that exact
    /// framing.
    pub fn encode(&self) -> String {
        let argument = self.argument.as_deref().unwrap_or("");
        format!("{} {}\n", self.name, argument)
    }
}
