//! Action Table Tests
//!
//! Tests for the dispatcher's gating contract: the fixed action order and
//! the per-action valid-state sets.

use chatlink::{Action, SessionState};

// =============================================================================
// Menu Order Tests
// =============================================================================

#[test]
fn test_actions_in_menu_order() {
    assert_eq!(
        Action::ALL,
        [
            Action::Connect,
            Action::Disconnect,
            Action::Login,
            Action::PublicMessage,
            Action::PrivateMessage,
            Action::ReadInbox,
            Action::ListUsers,
            Action::Joke,
            Action::Quit,
        ]
    );
}

#[test]
fn test_descriptions_are_distinct() {
    let mut descriptions: Vec<&str> =
        Action::ALL.iter().map(|a| a.description()).collect();
    descriptions.sort_unstable();
    descriptions.dedup();
    assert_eq!(descriptions.len(), Action::ALL.len());
}

// =============================================================================
// State Gating Tests
// =============================================================================

#[test]
fn test_connect_only_while_disconnected() {
    assert!(Action::Connect.is_available(SessionState::Disconnected));
    assert!(!Action::Connect.is_available(SessionState::Connected));
    assert!(!Action::Connect.is_available(SessionState::Authorized));
}

#[test]
fn test_private_message_only_while_authorized() {
    assert_eq!(
        Action::PrivateMessage.valid_states(),
        &[SessionState::Authorized]
    );
}

#[test]
fn test_online_actions_need_a_connection() {
    let online = [
        Action::Disconnect,
        Action::Login,
        Action::PublicMessage,
        Action::ReadInbox,
        Action::ListUsers,
        Action::Joke,
    ];
    for action in online {
        assert!(
            !action.is_available(SessionState::Disconnected),
            "{action:?} offered while disconnected"
        );
        assert!(action.is_available(SessionState::Connected));
        assert!(action.is_available(SessionState::Authorized));
    }
}

#[test]
fn test_quit_available_everywhere() {
    for state in [
        SessionState::Disconnected,
        SessionState::Connected,
        SessionState::Authorized,
    ] {
        assert!(Action::Quit.is_available(state));
    }
}
