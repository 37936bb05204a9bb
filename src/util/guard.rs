//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior. Guards wait for `loaded` so a reload does not bounce a
//! logged-in user to `/login` before storage has been read. These checks are
//! presentation only; the backend enforces authorization on every call.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if state.loaded && !state.logged_in {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect non-admins to the feed. Used by the admin page only.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if state.loaded && (!state.logged_in || !state.is_admin()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
