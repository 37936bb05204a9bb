use super::*;

#[test]
fn messages_endpoint_formats_expected_path() {
    assert_eq!(messages_endpoint(12), "/conversations/12/messages");
}
