//! REST API wrappers for the backend under `/api/*`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the bearer
//! token from browser storage injected as an `Authorization` header when a
//! session exists. Server-side (SSR): stubs returning errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; the error carries the HTTP
//! status plus the backend's `message` body when one was decodable, so pages
//! can surface server-provided text (login failures, duplicate categories)
//! without re-fetching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[path = "api_auth.rs"]
mod api_auth;
#[path = "api_categories.rs"]
mod api_categories;
#[path = "api_conversations.rs"]
mod api_conversations;
#[path = "api_posts.rs"]
mod api_posts;

pub use api_auth::{login, register};
pub use api_categories::{
    admin_approve_category_request, admin_categories, admin_create_category, admin_delete_category,
    admin_pending_category_requests, admin_reject_category_request, categories, request_category,
};
pub use api_conversations::{
    conversation_messages, conversations, leave_conversation, send_conversation_message, start_conversation,
};
pub use api_posts::{
    add_comment, bookmark_status, comments, delete_post, get_post, like_status, my_bookmarks, my_posts,
    posts, toggle_bookmark, toggle_like, update_post_status,
};
// Multipart upload calls take `web_sys` types and only exist in the browser.
#[cfg(feature = "hydrate")]
pub use api_posts::{create_post, update_post};

use std::fmt;

/// A failed API call: transport error, non-2xx status, or decode failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status, or 0 when the request never reached the server.
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub(super) fn transport(message: impl Into<String>) -> Self {
        Self { status: 0, message: message.into() }
    }

    #[cfg(not(feature = "hydrate"))]
    pub(super) fn unavailable() -> Self {
        Self::transport("not available on server")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (HTTP {})", self.message, self.status)
        }
    }
}

/// Base URL for REST calls. Same-origin `/api` unless overridden at compile
/// time for split-origin dev setups.
pub fn api_base() -> &'static str {
    option_env!("PLAZA_API_BASE").unwrap_or("/api")
}

/// Base URL for post images, which the backend serves outside `/api`.
pub fn image_base() -> &'static str {
    option_env!("PLAZA_IMAGE_BASE").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Extract the backend's `message` field from an error body, falling back to
/// a generic status line.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn error_message_from_body(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .unwrap_or_else(|| request_failed_message(status))
}

#[cfg(any(test, feature = "hydrate"))]
pub(super) fn posts_query(
    category: Option<&str>,
    sort: &str,
    status: Option<&str>,
    page: i32,
    size: i32,
) -> String {
    let mut query = String::new();
    if let Some(category) = category {
        query.push_str(&format!("category={category}&"));
    }
    query.push_str(&format!("sort={sort}&"));
    if let Some(status) = status {
        query.push_str(&format!("status={status}&"));
    }
    query.push_str(&format!("page={page}&size={size}"));
    query
}

#[cfg(feature = "hydrate")]
pub(super) fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::state::auth::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Check the response status, turning error bodies into [`ApiError`]s.
#[cfg(feature = "hydrate")]
pub(super) async fn expect_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError { status, message: error_message_from_body(status, &body) })
}

/// GET `path` (relative to [`api_base`]) and decode a JSON response.
#[cfg(feature = "hydrate")]
pub(super) async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let resp = authorized(gloo_net::http::Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    expect_ok(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))
}

/// POST a JSON `payload` to `path` and decode a JSON response.
#[cfg(feature = "hydrate")]
pub(super) async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    payload: &serde_json::Value,
) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let resp = authorized(gloo_net::http::Request::post(&url))
        .json(payload)
        .map_err(|e| ApiError::transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    expect_ok(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))
}

/// POST with no body, decoding a JSON response.
#[cfg(feature = "hydrate")]
pub(super) async fn post_empty<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let resp = authorized(gloo_net::http::Request::post(&url))
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    expect_ok(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))
}

/// DELETE `path`, ignoring any response body.
#[cfg(feature = "hydrate")]
pub(super) async fn delete(path: &str) -> Result<(), ApiError> {
    let url = format!("{}{path}", api_base());
    let resp = authorized(gloo_net::http::Request::delete(&url))
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    expect_ok(resp).await.map(|_| ())
}

/// PATCH a JSON `payload` to `path` and decode a JSON response.
#[cfg(feature = "hydrate")]
pub(super) async fn patch_json<T: serde::de::DeserializeOwned>(
    path: &str,
    payload: &serde_json::Value,
) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let resp = authorized(gloo_net::http::Request::patch(&url))
        .json(payload)
        .map_err(|e| ApiError::transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    expect_ok(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))
}

/// Send a `FormData` body (multipart) and decode a JSON response. Used by the
/// post composer for image uploads; the browser sets the multipart boundary.
#[cfg(feature = "hydrate")]
pub(super) async fn send_form<T: serde::de::DeserializeOwned>(
    method: &str,
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let url = format!("{}{path}", api_base());
    let builder = match method {
        "PUT" => gloo_net::http::Request::put(&url),
        _ => gloo_net::http::Request::post(&url),
    };
    let resp = authorized(builder)
        .body(form)
        .map_err(|e| ApiError::transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))?;
    expect_ok(resp)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(e.to_string()))
}
