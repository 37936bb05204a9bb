use super::*;

fn msg(id: i64, sender: Option<&str>, content: &str) -> ChatMessage {
    ChatMessage {
        id,
        conversation_id: 1,
        sender_nickname: sender.map(str::to_owned),
        content: content.to_owned(),
        system_message: false,
        created_at: "2025-06-01T10:00:00".to_owned(),
    }
}

fn system(id: i64, content: &str) -> ChatMessage {
    ChatMessage { system_message: true, ..msg(id, None, content) }
}

// =============================================================
// Dedup merge
// =============================================================

#[test]
fn absorb_appends_new_messages_in_arrival_order() {
    let mut state = ChatState::default();
    assert!(state.absorb(msg(1, Some("bob"), "hi"), Some("ann")));
    assert!(state.absorb(msg(2, Some("ann"), "hello"), Some("ann")));
    let ids: Vec<i64> = state.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn absorb_drops_duplicate_ids() {
    let mut state = ChatState::default();
    assert!(state.absorb(msg(1, Some("bob"), "hi"), Some("ann")));
    assert!(!state.absorb(msg(1, Some("bob"), "hi"), Some("ann")));
    assert_eq!(state.messages.len(), 1);
}

#[test]
fn duplicate_never_rewrites_existing_entry() {
    let mut state = ChatState::default();
    state.absorb(msg(1, Some("bob"), "original"), Some("ann"));
    state.absorb(msg(1, Some("bob"), "mutated copy"), Some("ann"));
    assert_eq!(state.messages[0].content, "original");
}

#[test]
fn poll_result_lagging_socket_does_not_reorder() {
    let mut state = ChatState::default();
    // Socket delivered 3 first; the poll then returns [1, 2, 3].
    state.absorb(msg(3, Some("bob"), "third"), Some("ann"));
    let added = state.absorb_all(
        vec![
            msg(1, Some("bob"), "first"),
            msg(2, Some("ann"), "second"),
            msg(3, Some("bob"), "third"),
        ],
        Some("ann"),
    );
    assert_eq!(added, 2);
    let ids: Vec<i64> = state.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn absorb_all_unions_overlapping_pages() {
    let mut state = ChatState::default();
    state.absorb_all(vec![msg(1, Some("bob"), "a"), msg(2, Some("bob"), "b")], Some("ann"));
    let added = state.absorb_all(vec![msg(2, Some("bob"), "b"), msg(3, Some("bob"), "c")], Some("ann"));
    assert_eq!(added, 1);
    assert_eq!(state.messages.len(), 3);
}

// =============================================================
// Peer-left detection
// =============================================================

#[test]
fn peer_leave_notice_sets_other_left() {
    let mut state = ChatState::default();
    state.absorb(system(5, "bob left the conversation."), Some("ann"));
    assert!(state.other_left);
}

#[test]
fn own_leave_notice_does_not_set_other_left() {
    let mut state = ChatState::default();
    state.absorb(system(5, "ann left the conversation."), Some("ann"));
    assert!(!state.other_left);
}

#[test]
fn ordinary_message_mentioning_leaving_is_not_a_notice() {
    let mut state = ChatState::default();
    state.absorb(msg(5, Some("bob"), "I almost left the conversation"), Some("ann"));
    assert!(!state.other_left);
}

#[test]
fn leave_notice_without_known_self_nickname_still_counts() {
    let mut state = ChatState::default();
    state.absorb(system(5, "bob left the conversation."), None);
    assert!(state.other_left);
}

// =============================================================
// Peer nickname extraction
// =============================================================

#[test]
fn first_foreign_sender_becomes_other_nickname() {
    let mut state = ChatState::default();
    state.absorb(msg(1, Some("ann"), "mine"), Some("ann"));
    assert!(state.other_nickname.is_none());
    state.absorb(msg(2, Some("bob"), "theirs"), Some("ann"));
    assert_eq!(state.other_nickname.as_deref(), Some("bob"));
}

#[test]
fn other_nickname_is_not_overwritten() {
    let mut state = ChatState::default();
    state.absorb(msg(1, Some("bob"), "hi"), Some("ann"));
    state.absorb(msg(2, Some("eve"), "hi"), Some("ann"));
    assert_eq!(state.other_nickname.as_deref(), Some("bob"));
}

#[test]
fn system_messages_do_not_supply_nicknames() {
    let mut state = ChatState::default();
    state.absorb(system(1, "bob joined"), Some("ann"));
    assert!(state.other_nickname.is_none());
}
