use super::*;

#[test]
fn encode_send_frame_has_terminator_and_blank_line() {
    let frame = send_frame("/app/chat/3", &serde_json::json!({"content": "hi"}));
    let wire = encode_frame(&frame);
    assert!(wire.starts_with("SEND\ndestination:/app/chat/3\n"));
    assert!(wire.contains("\n\n{\"content\":\"hi\"}\0"));
}

#[test]
fn encode_parse_round_trips_message_frame() {
    let frame = Frame::new(Command::Message)
        .header("destination", "/topic/messages/3")
        .header("message-id", "m-1")
        .body(r#"{"id":9}"#);
    let parsed = parse_frame(&encode_frame(&frame))
        .expect("well-formed frame should parse")
        .expect("not a heartbeat");
    assert_eq!(parsed, frame);
}

#[test]
fn parse_heartbeat_returns_none() {
    assert!(parse_frame("\n").expect("heartbeat should parse").is_none());
    assert!(parse_frame("\r\n").expect("crlf heartbeat should parse").is_none());
}

#[test]
fn parse_tolerates_crlf_line_endings() {
    let parsed = parse_frame("MESSAGE\r\ndestination:/topic/messages/1\r\n\r\nbody\0")
        .expect("crlf frame should parse")
        .expect("not a heartbeat");
    assert_eq!(parsed.command, Command::Message);
    assert_eq!(parsed.header_value("destination"), Some("/topic/messages/1"));
    assert_eq!(parsed.body, "body");
}

#[test]
fn parse_preserves_body_containing_blank_lines() {
    let parsed = parse_frame("MESSAGE\nk:v\n\nline1\n\nline2\0")
        .expect("frame should parse")
        .expect("not a heartbeat");
    assert_eq!(parsed.body, "line1\n\nline2");
}

#[test]
fn parse_rejects_unknown_command() {
    let err = parse_frame("NACK\n\n\0").expect_err("unknown command should fail");
    assert!(matches!(err, StompError::UnknownCommand(c) if c == "NACK"));
}

#[test]
fn parse_rejects_header_without_separator() {
    let err = parse_frame("MESSAGE\nnot-a-header\n\n\0").expect_err("bad header should fail");
    assert!(matches!(err, StompError::MalformedHeader(_)));
}

#[test]
fn header_escaping_round_trips_on_send_frames() {
    let frame = Frame::new(Command::Send).header("destination", "a:b\nc\\d");
    let wire = encode_frame(&frame);
    assert!(wire.contains("destination:a\\cb\\nc\\\\d"));
    let parsed = parse_frame(&wire).expect("escaped frame should parse").expect("not a heartbeat");
    assert_eq!(parsed.header_value("destination"), Some("a:b\nc\\d"));
}

#[test]
fn connect_frame_headers_are_not_escaped() {
    let wire = encode_frame(&connect_frame("plaza", Some("a:b")));
    assert!(wire.contains("Authorization:Bearer a:b\n"));
}

#[test]
fn parse_keeps_first_value_of_repeated_header() {
    let parsed = parse_frame("MESSAGE\nfoo:first\nfoo:second\n\n\0")
        .expect("frame should parse")
        .expect("not a heartbeat");
    assert_eq!(parsed.header_value("foo"), Some("first"));
}

#[test]
fn parse_rejects_undefined_escape() {
    let err = parse_frame("MESSAGE\nfoo:bad\\t\n\n\0").expect_err("undefined escape should fail");
    assert!(matches!(err, StompError::InvalidEscape));
}

#[test]
fn parse_tolerates_missing_terminator() {
    let parsed = parse_frame("MESSAGE\nfoo:bar\n\nbody")
        .expect("frame should parse")
        .expect("not a heartbeat");
    assert_eq!(parsed.body, "body");
}

#[test]
fn connect_frame_without_token_omits_authorization() {
    let frame = connect_frame("plaza", None);
    assert!(frame.header_value("Authorization").is_none());
    assert_eq!(frame.header_value("accept-version"), Some("1.2"));
}
