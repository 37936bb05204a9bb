//! Authentication state backed by browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token, nickname, and role live in `localStorage` so sessions
//! survive reloads. `AuthState` mirrors storage into a reactive signal;
//! `loaded` stays false until storage has actually been read once, which
//! keeps route guards from redirecting during hydration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthSession;
use crate::util::storage;

pub const TOKEN_KEY: &str = "token";
pub const NICKNAME_KEY: &str = "nickname";
pub const ROLE_KEY: &str = "role";

const ADMIN_ROLE: &str = "ADMIN";

/// Reactive view of the stored session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub nickname: Option<String>,
    pub role: Option<String>,
    pub logged_in: bool,
    /// True once storage has been consulted; guards gate on this.
    pub loaded: bool,
}

impl AuthState {
    /// Rebuild the state from whatever browser storage currently holds.
    pub fn from_storage() -> Self {
        let token = storage::load_string(TOKEN_KEY);
        Self {
            nickname: storage::load_string(NICKNAME_KEY),
            role: storage::load_string(ROLE_KEY),
            logged_in: token.is_some(),
            loaded: true,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }

    /// State after a successful login/register.
    pub fn from_session(session: &AuthSession) -> Self {
        Self {
            nickname: Some(session.nickname.clone()),
            role: Some(session.role.clone()),
            logged_in: true,
            loaded: true,
        }
    }

    /// Logged-out state, `loaded` preserved.
    pub fn cleared() -> Self {
        Self {
            nickname: None,
            role: None,
            logged_in: false,
            loaded: true,
        }
    }
}

/// Persist a session to storage. Callers update the signal separately via
/// [`AuthState::from_session`].
pub fn persist_session(session: &AuthSession) {
    storage::save_string(TOKEN_KEY, &session.token);
    storage::save_string(NICKNAME_KEY, &session.nickname);
    storage::save_string(ROLE_KEY, &session.role);
}

/// Drop the stored session.
pub fn clear_session() {
    storage::remove(TOKEN_KEY);
    storage::remove(NICKNAME_KEY);
    storage::remove(ROLE_KEY);
}

/// The bearer token, if a session is stored.
pub fn stored_token() -> Option<String> {
    storage::load_string(TOKEN_KEY)
}
