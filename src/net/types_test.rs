use super::*;

#[test]
fn post_deserializes_camel_case_payload() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "hello",
        "content": "body",
        "imageUrl": "/images/7.jpg",
        "category": "HUMOR",
        "likeCount": 3,
        "viewCount": 120,
        "commentCount": 2,
        "createdAt": "2025-06-01T10:00:00"
    }))
    .expect("post payload should deserialize");
    assert_eq!(post.id, 7);
    assert_eq!(post.image_url.as_deref(), Some("/images/7.jpg"));
    assert_eq!(post.like_count, 3);
    assert_eq!(post.comment_count, Some(2));
    assert!(post.status.is_none());
    assert!(post.bookmarked.is_none());
}

#[test]
fn post_accepts_whole_float_ids_and_counts() {
    let post: Post = serde_json::from_value(serde_json::json!({
        "id": 7.0,
        "title": "t",
        "content": "c",
        "category": "CAT",
        "likeCount": 3.0,
        "viewCount": 0,
        "createdAt": "2025-06-01T10:00:00"
    }))
    .expect("float-encoded numbers should deserialize");
    assert_eq!(post.id, 7);
    assert_eq!(post.like_count, 3);
    assert_eq!(post.comment_count, None);
}

#[test]
fn post_rejects_fractional_id() {
    let result = serde_json::from_value::<Post>(serde_json::json!({
        "id": 7.5,
        "title": "t",
        "content": "c",
        "category": "CAT",
        "likeCount": 0,
        "viewCount": 0,
        "createdAt": "2025-06-01T10:00:00"
    }));
    assert!(result.is_err());
}

#[test]
fn page_maps_spring_fields() {
    let page: Page<Post> = serde_json::from_value(serde_json::json!({
        "content": [],
        "totalPages": 4,
        "totalElements": 40,
        "last": false,
        "number": 1
    }))
    .expect("page payload should deserialize");
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.total_elements, 40);
    assert!(!page.last);
}

#[test]
fn comment_defaults_replies_to_empty() {
    let comment: Comment = serde_json::from_value(serde_json::json!({
        "id": 1,
        "content": "nice",
        "authorName": "ann",
        "createdAt": "2025-06-01T10:00:00"
    }))
    .expect("comment without replies should deserialize");
    assert!(comment.replies.is_empty());
}

#[test]
fn comment_nests_replies() {
    let comment: Comment = serde_json::from_value(serde_json::json!({
        "id": 1,
        "content": "parent",
        "authorName": "ann",
        "createdAt": "2025-06-01T10:00:00",
        "replies": [
            {"id": 2, "content": "child", "authorName": "bob", "createdAt": "2025-06-01T10:05:00"}
        ]
    }))
    .expect("nested comment should deserialize");
    assert_eq!(comment.replies.len(), 1);
    assert_eq!(comment.replies[0].author_name, "bob");
}

#[test]
fn chat_message_allows_null_sender_for_system_messages() {
    let msg: ChatMessage = serde_json::from_value(serde_json::json!({
        "id": 9,
        "conversationId": 4,
        "senderNickname": null,
        "content": "bob left the conversation.",
        "systemMessage": true,
        "createdAt": "2025-06-01T10:00:00"
    }))
    .expect("system message should deserialize");
    assert!(msg.system_message);
    assert!(msg.sender_nickname.is_none());
}

#[test]
fn auth_session_defaults_missing_role_to_user() {
    let session: AuthSession = serde_json::from_value(serde_json::json!({
        "token": "jwt",
        "nickname": "ann"
    }))
    .expect("session without role should deserialize");
    assert_eq!(session.role, "USER");
}

#[test]
fn conversation_defaults_other_left_to_false() {
    let conv: Conversation = serde_json::from_value(serde_json::json!({
        "id": 4,
        "otherNickname": "bob",
        "lastMessage": "hey",
        "updatedAt": "2025-06-01T10:00:00"
    }))
    .expect("conversation payload should deserialize");
    assert!(!conv.other_left);
}
