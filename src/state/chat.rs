//! Chat room state and the message reconciliation it depends on.
//!
//! DESIGN
//! ======
//! Two sources race to update the same message list: STOMP pushes from the
//! broker and the 3-second REST poll. Reconciliation policy: union by
//! message id, append-only, arrival order. An id already present is never
//! duplicated, and existing entries are never reordered or rewritten, so a
//! poll result that lags the socket cannot shuffle the transcript.
//!
//! Peer-left tracking and the peer's nickname are derived facts recomputed
//! from each absorbed message rather than stored protocol state.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::HashSet;

use crate::net::types::ChatMessage;

/// Substring the backend puts in the system message posted when a
/// participant leaves.
const LEFT_MARKER: &str = "left the conversation";

/// State for one open chat room.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Ids of everything in `messages`; kept alongside so the hot-path merge
    /// check is O(1) instead of a scan per poll result.
    seen_ids: HashSet<i64>,
    pub loading: bool,
    /// Nickname of the other participant, learned from their first message.
    pub other_nickname: Option<String>,
    /// The other participant left; the composer is disabled.
    pub other_left: bool,
    /// Socket connectivity, for the composer hint.
    pub connected: bool,
}

impl ChatState {
    /// Initial state for a just-opened room: history still loading.
    #[must_use]
    pub fn opening() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Absorb one message from either source. Returns true when the message
    /// was new (callers use this to decide whether to autoscroll).
    pub fn absorb(&mut self, msg: ChatMessage, self_nickname: Option<&str>) -> bool {
        if !self.seen_ids.insert(msg.id) {
            return false;
        }
        if is_peer_left_message(&msg, self_nickname) {
            self.other_left = true;
        }
        if self.other_nickname.is_none()
            && let Some(name) = peer_nickname(&msg, self_nickname)
        {
            self.other_nickname = Some(name.to_owned());
        }
        self.messages.push(msg);
        true
    }

    /// Absorb a full poll/history result. Returns the number of new messages.
    pub fn absorb_all(&mut self, msgs: Vec<ChatMessage>, self_nickname: Option<&str>) -> usize {
        msgs.into_iter()
            .filter(|msg| self.absorb(msg.clone(), self_nickname))
            .count()
    }
}

/// Whether `msg` is the system notice for the *other* participant leaving.
/// The current user's own leave notice starts with their nickname and is not
/// a peer departure.
fn is_peer_left_message(msg: &ChatMessage, self_nickname: Option<&str>) -> bool {
    if !msg.system_message || !msg.content.contains(LEFT_MARKER) {
        return false;
    }
    !self_nickname.is_some_and(|nick| msg.content.starts_with(nick))
}

/// The peer's nickname, if `msg` reveals it: a non-system message authored
/// by someone other than the current user.
fn peer_nickname<'a>(msg: &'a ChatMessage, self_nickname: Option<&str>) -> Option<&'a str> {
    if msg.system_message {
        return None;
    }
    let sender = msg.sender_nickname.as_deref()?;
    if self_nickname == Some(sender) {
        return None;
    }
    Some(sender)
}
