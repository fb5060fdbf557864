//! Property-based tests for wire events

use darkchat::shared::{ClientEvent, NewMessage, RelayEvent};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_parse_never_panics(frame in ".*") {
        // Arbitrary text either parses or reports a malformed payload
        if let Err(err) = ClientEvent::parse(&frame) {
            prop_assert!(err.is_invalid_submission());
        }
    }

    #[test]
    fn test_message_event_parses(username in "[a-z]{1,12}", text in ".*") {
        let frame = serde_json::json!({
            "type": "message",
            "payload": { "userId": "u1", "username": username, "text": text },
        })
        .to_string();

        let ClientEvent::Message(submission) = ClientEvent::parse(&frame).unwrap();
        prop_assert_eq!(submission, NewMessage::text("u1", username, text));
    }

    #[test]
    fn test_relay_frame_is_tagged(username in "[a-z]{1,12}", text in ".*") {
        let message = NewMessage::text("u1", username, text)
            .into_message("1".to_string(), "2024-01-01T00:00:00.000Z".to_string());
        let frame = RelayEvent::Message(message.clone()).to_frame().unwrap();

        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        prop_assert_eq!(&value["type"], "message");
        prop_assert_eq!(value["payload"]["id"].as_str(), Some("1"));
        prop_assert_eq!(value["payload"]["createdAt"].as_str(), Some(message.created_at.as_str()));
    }
}
