use super::*;

#[test]
fn topic_destination_matches_broker_contract() {
    assert_eq!(topic_destination(12), "/topic/messages/12");
}

#[test]
fn app_destination_matches_broker_contract() {
    assert_eq!(app_destination(12), "/app/chat/12");
}

#[test]
fn chat_send_payload_wraps_content() {
    assert_eq!(chat_send_payload("hi"), serde_json::json!({ "content": "hi" }));
}

#[test]
fn parse_pushed_message_decodes_broker_body() {
    let msg = parse_pushed_message(
        r#"{"id":3,"conversationId":12,"senderNickname":"bob","content":"hey","systemMessage":false,"createdAt":"2025-06-01T10:00:00"}"#,
    )
    .expect("valid body should decode");
    assert_eq!(msg.id, 3);
    assert_eq!(msg.sender_nickname.as_deref(), Some("bob"));
}

#[test]
fn parse_pushed_message_skips_non_message_bodies() {
    assert!(parse_pushed_message("pong").is_none());
    assert!(parse_pushed_message(r#"{"kind":"presence"}"#).is_none());
}

#[test]
fn ws_endpoint_follows_page_scheme() {
    assert_eq!(ws_endpoint(false, "localhost:8080"), "ws://localhost:8080/ws");
    assert_eq!(ws_endpoint(true, "plaza.example"), "wss://plaza.example/ws");
}
