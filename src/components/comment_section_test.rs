use super::*;

fn comment(id: i64, content: &str) -> Comment {
    Comment {
        id,
        content: content.to_owned(),
        author_name: "ann".to_owned(),
        replies: Vec::new(),
        created_at: "2025-06-01T10:00:00".to_owned(),
    }
}

#[test]
fn top_level_comments_prepend() {
    let mut comments = vec![comment(1, "older")];
    insert_comment(&mut comments, comment(2, "newer"), None);
    let ids: Vec<i64> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn replies_append_to_their_parent() {
    let mut comments = vec![comment(1, "parent"), comment(2, "other")];
    insert_comment(&mut comments, comment(3, "reply"), Some(1));
    assert_eq!(comments[0].replies.len(), 1);
    assert!(comments[1].replies.is_empty());
}

#[test]
fn reply_to_unknown_parent_is_dropped() {
    let mut comments = vec![comment(1, "parent")];
    insert_comment(&mut comments, comment(3, "orphan"), Some(99));
    assert_eq!(total_count(&comments), 1);
}

#[test]
fn total_count_includes_replies() {
    let mut comments = vec![comment(1, "a"), comment(2, "b")];
    insert_comment(&mut comments, comment(3, "r1"), Some(1));
    insert_comment(&mut comments, comment(4, "r2"), Some(1));
    assert_eq!(total_count(&comments), 4);
}

#[test]
fn total_count_of_empty_list_is_zero() {
    assert_eq!(total_count(&[]), 0);
}
