//! Direct-message conversation calls extracted from `api`.
//!
//! `conversation_messages` doubles as the chat room's polling fallback; the
//! realtime path lives in `net::chat_client`.

#[cfg(test)]
#[path = "api_conversations_test.rs"]
mod api_conversations_test;

use super::ApiError;
use crate::net::types::{ChatMessage, Conversation};
#[cfg(feature = "hydrate")]
use serde::Deserialize;

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(conversation_id: i64) -> String {
    format!("/conversations/{conversation_id}/messages")
}

#[cfg(feature = "hydrate")]
#[derive(Debug, Deserialize)]
struct StartConversationResponse {
    #[serde(rename = "conversationId")]
    conversation_id: i64,
}

/// Start (or resume) a conversation with another user by nickname; returns
/// the conversation id to navigate to.
pub async fn start_conversation(nickname: &str) -> Result<i64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body: StartConversationResponse =
            super::post_json("/conversations", &serde_json::json!({ "nickname": nickname })).await?;
        Ok(body.conversation_id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = nickname;
        Err(ApiError::unavailable())
    }
}

/// The current user's conversation list, most recently updated first.
pub async fn conversations() -> Result<Vec<Conversation>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/conversations").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Full message history for a conversation. Also used by the 3-second chat
/// poll, whose results are unioned with socket pushes by id.
pub async fn conversation_messages(conversation_id: i64) -> Result<Vec<ChatMessage>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json(&messages_endpoint(conversation_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = conversation_id;
        Err(ApiError::unavailable())
    }
}

/// REST message send. The chat room publishes over STOMP instead; this path
/// exists for parity with the backend contract.
pub async fn send_conversation_message(conversation_id: i64, content: &str) -> Result<ChatMessage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json(&messages_endpoint(conversation_id), &serde_json::json!({ "content": content })).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (conversation_id, content);
        Err(ApiError::unavailable())
    }
}

/// Leave a conversation; the backend posts a system message to the peer.
pub async fn leave_conversation(conversation_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: serde_json::Value =
            super::post_empty(&format!("/conversations/{conversation_id}/leave")).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = conversation_id;
        Err(ApiError::unavailable())
    }
}
