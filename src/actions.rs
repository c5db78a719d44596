//! Action table
//!
//! The fixed, ordered list of user-facing actions. Each variant carries its
//! menu description and the set of session states it may be invoked from;
//! the dispatcher (menu loop) is responsible for offering only the actions
//! valid in the current state and for collecting any free-text arguments
//! before calling into the session.

use crate::session::{SessionState, AUTHORIZED_STATES, CONNECTED_STATES};

const DISCONNECTED_ONLY: &[SessionState] = &[SessionState::Disconnected];

const ALL_STATES: &[SessionState] = &[
    SessionState::Disconnected,
    SessionState::Connected,
    SessionState::Authorized,
];

/// One user-facing action, tagged per protocol operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open a connection to the chat server
    Connect,
    /// Close the connection
    Disconnect,
    /// Log in under a username
    Login,
    /// Send a public message
    PublicMessage,
    /// Send a private message to one user
    PrivateMessage,
    /// Retrieve pending inbox messages
    ReadInbox,
    /// List connected usernames
    ListUsers,
    /// Fetch a joke
    Joke,
    /// Leave the application
    Quit,
}

impl Action {
    /// Every action, in menu order
    pub const ALL: [Action; 9] = [
        Action::Connect,
        Action::Disconnect,
        Action::Login,
        Action::PublicMessage,
        Action::PrivateMessage,
        Action::ReadInbox,
        Action::ListUsers,
        Action::Joke,
        Action::Quit,
    ];

    /// Menu description of the action
    pub fn description(&self) -> &'static str {
        match self {
            Action::Connect => "Connect to a chat server",
            Action::Disconnect => "Disconnect from the server",
            Action::Login => "Authorize (log in)",
            Action::PublicMessage => "Send a public message",
            Action::PrivateMessage => "Send a private message",
            Action::ReadInbox => "Read messages in the inbox",
            Action::ListUsers => "See list of users",
            Action::Joke => "Get a joke",
            Action::Quit => "Quit the application",
        }
    }

    /// Session states this action may be invoked from
    pub fn valid_states(&self) -> &'static [SessionState] {
        match self {
            Action::Connect => DISCONNECTED_ONLY,
            Action::Disconnect
            | Action::Login
            | Action::PublicMessage
            | Action::ReadInbox
            | Action::ListUsers
            | Action::Joke => CONNECTED_STATES,
            Action::PrivateMessage => AUTHORIZED_STATES,
            Action::Quit => ALL_STATES,
        }
    }

    /// Whether the action is available in `state`
    pub fn is_available(&self, state: SessionState) -> bool {
        self.valid_states().contains(&state)
    }
}
