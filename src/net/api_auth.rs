//! Login/register calls extracted from `api`.

#[cfg(test)]
#[path = "api_auth_test.rs"]
mod api_auth_test;

use super::ApiError;
use crate::net::types::AuthSession;

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(email: &str, password: &str, nickname: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password, "nickname": nickname })
}

/// Authenticate via `POST /api/auth/login`. Callers persist the returned
/// session through `state::auth`.
pub async fn login(email: &str, password: &str) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json("/auth/login", &login_payload(email, password)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::unavailable())
    }
}

/// Create an account via `POST /api/auth/register`; the backend logs the new
/// user straight in and returns a session.
pub async fn register(email: &str, password: &str, nickname: &str) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json("/auth/register", &register_payload(email, password, nickname)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, nickname);
        Err(ApiError::unavailable())
    }
}
