use super::*;

#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint(42), "/posts/42");
}

#[test]
fn comments_endpoint_nests_under_post() {
    assert_eq!(comments_endpoint(7), "/posts/7/comments");
}

#[test]
fn comment_payload_omits_parent_for_top_level() {
    let payload = comment_payload("hi", "ann", None);
    assert_eq!(payload["content"], "hi");
    assert_eq!(payload["authorName"], "ann");
    assert!(payload.get("parentId").is_none());
}

#[test]
fn comment_payload_includes_parent_for_replies() {
    let payload = comment_payload("hi", "ann", Some(3));
    assert_eq!(payload["parentId"], 3);
}
