//! Wire DTOs for the backend REST/STOMP boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror backend response payloads so serde
//! round-trips stay lossless. The client enforces no invariants of its own;
//! every mutation is delegated to the backend and the structs here only
//! reflect what it returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A board post as returned by `/api/posts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend-assigned post identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Path of the lead image relative to the image host, if any.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Category name key (e.g. `"HUMOR"`), resolved to a label/color via the
    /// category cache.
    pub category: String,
    /// Workflow status for categories that track one
    /// (`REGISTERED`/`ING`/`COMPLETE`).
    #[serde(default)]
    pub status: Option<String>,
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub like_count: i32,
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub view_count: i32,
    #[serde(default, deserialize_with = "deserialize_opt_i32_from_number")]
    pub comment_count: Option<i32>,
    /// Whether the requesting user bookmarked this post. Only present on
    /// authenticated profile/detail responses.
    #[serde(default)]
    pub bookmarked: Option<bool>,
    /// Backend timestamp (`LocalDateTime`, no zone suffix).
    pub created_at: String,
}

/// One page of a Spring `Page<T>` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub total_pages: i32,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_elements: i64,
    /// True when this is the final page; drives the feed's `has_more`.
    pub last: bool,
    /// Zero-based page index.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub number: i32,
}

/// A comment, possibly carrying nested replies.
///
/// The backend serializes the tree one level at a time: top-level comments
/// arrive with their `replies` populated and replies arrive with an empty
/// list. The parent link itself is not part of the payload; it is only sent
/// client→server when creating a reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub content: String,
    pub author_name: String,
    #[serde(default)]
    pub replies: Vec<Comment>,
    pub created_at: String,
}

/// A category as shown in the feed filter and composer dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Stable uppercase key used in post payloads and query params.
    pub name: String,
    /// Human-readable display name.
    pub label: String,
    /// Color key for the filter chip (e.g. `"blue"`).
    pub color: String,
}

/// A pending/settled user request for a new category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequestInfo {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    /// `PENDING`, `APPROVED` or `REJECTED`.
    pub status: String,
    #[serde(default)]
    pub requester_nickname: Option<String>,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    pub created_at: String,
}

/// A direct-message conversation summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub other_nickname: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    pub updated_at: String,
    /// Whether the other participant has left the conversation.
    #[serde(default)]
    pub other_left: bool,
}

/// A single chat message, pushed over STOMP and also served by the REST
/// message-list endpoint. Both sources feed the same deduplicating merge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub conversation_id: i64,
    /// `None` for system messages (join/leave notices).
    #[serde(default)]
    pub sender_nickname: Option<String>,
    pub content: String,
    #[serde(default)]
    pub system_message: bool,
    pub created_at: String,
}

/// The session returned by login/register: bearer token plus the identity
/// fields the client caches in browser storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub nickname: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "USER".to_owned()
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for i32")))
}

fn deserialize_opt_i32_from_number<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => {
            let int = integer_from_json_number(&value)
                .ok_or_else(|| D::Error::custom("expected integer-compatible number"))?;
            i32::try_from(int)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("value {int} out of range for i32")))
        }
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    integer_from_json_number(&value).ok_or_else(|| D::Error::custom("expected integer-compatible number"))
}

/// Accept both integer and whole-float encodings; backend `Long`s can arrive
/// as floats through intermediaries.
fn integer_from_json_number(value: &serde_json::Value) -> Option<i64> {
    let number = value.as_number()?;
    if let Some(int) = number.as_i64() {
        return Some(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Some(float as i64);
    }
    None
}
