//! Native browser dialogs for mutation failures and destructive confirms.
//!
//! Server-side both are inert; `confirm` answers false so destructive
//! actions never proceed without a real user.

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = message;
}

/// Blocking `window.confirm`; false when unavailable.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
