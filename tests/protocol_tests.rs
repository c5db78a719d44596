//! Protocol Tests
//!
//! Tests for command encoding, response parsing, and inbox payloads.

use chatlink::protocol::{Command, Inbox, MessageKind, ServerResponse};
use chatlink::ChatError;

// =============================================================================
// Command Encoding Tests
// =============================================================================

#[test]
fn test_encode_command_with_argument() {
    assert_eq!(Command::login("alice").encode(), "login alice\n");
    assert_eq!(Command::public_message("hi there").encode(), "msg hi there\n");
    assert_eq!(
        Command::private_message("bob", "see you at 5").encode(),
        "privmsg bob see you at 5\n"
    );
}

#[test]
fn test_encode_bare_command_keeps_trailing_space() {
    // An absent argument encodes as the empty string; the space separator
    // stays, exactly as the server expects.
    assert_eq!(Command::sync().encode(), "sync \n");
    assert_eq!(Command::users().encode(), "users \n");
    assert_eq!(Command::inbox().encode(), "inbox \n");
    assert_eq!(Command::joke().encode(), "joke \n");
}

#[test]
fn test_command_name() {
    assert_eq!(Command::login("alice").name(), "login");
    assert_eq!(Command::joke().name(), "joke");
}

// =============================================================================
// Response Parsing Tests
// =============================================================================

#[test]
fn test_response_status_and_payload() {
    let response = ServerResponse::new("users alice bob carol".to_string());
    assert_eq!(response.status(), "users");
    assert_eq!(response.payload_tokens(), vec!["alice", "bob", "carol"]);
    assert_eq!(response.payload_text(), "alice bob carol");
    assert_eq!(response.raw(), "users alice bob carol");
}

#[test]
fn test_empty_response_line() {
    let response = ServerResponse::new(String::new());
    assert_eq!(response.status(), "");
    assert!(response.payload_tokens().is_empty());
}

#[test]
fn test_exact_keyword_match() {
    assert!(ServerResponse::new("loginok".to_string()).is_exactly("loginok"));
    assert!(!ServerResponse::new("loginok extra".to_string()).is_exactly("loginok"));
    assert!(!ServerResponse::new("nope".to_string()).is_exactly("loginok"));
}

#[test]
fn test_message_ack_pattern() {
    assert!(ServerResponse::new("msgok 42".to_string()).is_message_ack());
    assert!(ServerResponse::new("msgok 7 anything".to_string()).is_message_ack());

    // No numeric token, wrong keyword, or nothing at all: not an ack
    assert!(!ServerResponse::new("msgok".to_string()).is_message_ack());
    assert!(!ServerResponse::new("msgok abc".to_string()).is_message_ack());
    assert!(!ServerResponse::new("error".to_string()).is_message_ack());
    assert!(!ServerResponse::new(String::new()).is_message_ack());
}

// =============================================================================
// Inbox Payload Tests
// =============================================================================

#[test]
fn test_inbox_split_mixed_kinds() {
    let inbox = Inbox::from_packed("public bob hello;privmsg carol secret").unwrap();

    assert_eq!(inbox.len(), 2);
    assert_eq!(inbox.public.len(), 1);
    assert_eq!(inbox.public[0].kind, MessageKind::Public);
    assert_eq!(inbox.public[0].sender, "bob");
    assert_eq!(inbox.public[0].body, "hello");

    assert_eq!(inbox.private.len(), 1);
    assert_eq!(inbox.private[0].kind, MessageKind::Private);
    assert_eq!(inbox.private[0].sender, "carol");
    assert_eq!(inbox.private[0].body, "secret");
}

#[test]
fn test_inbox_preserves_arrival_order() {
    let inbox =
        Inbox::from_packed("privmsg a one;privmsg b two;public c three;public d four")
            .unwrap();

    let private: Vec<&str> = inbox.private.iter().map(|m| m.sender.as_str()).collect();
    let public: Vec<&str> = inbox.public.iter().map(|m| m.sender.as_str()).collect();
    assert_eq!(private, vec!["a", "b"]);
    assert_eq!(public, vec!["c", "d"]);
}

#[test]
fn test_inbox_multi_word_body() {
    let inbox = Inbox::from_packed("public bob hello there friend").unwrap();
    assert_eq!(inbox.public[0].body, "hello there friend");
}

#[test]
fn test_inbox_unknown_kind_is_public() {
    // Anything other than `privmsg` counts as public
    let inbox = Inbox::from_packed("shout bob hello").unwrap();
    assert_eq!(inbox.public[0].kind, MessageKind::Public);
}

#[test]
fn test_inbox_segment_missing_sender() {
    let err = Inbox::from_packed("privmsg").unwrap_err();
    assert!(matches!(err, ChatError::Protocol(_)));
}

#[test]
fn test_inbox_empty_segment() {
    let err = Inbox::from_packed("").unwrap_err();
    assert!(matches!(err, ChatError::Protocol(_)));
}
