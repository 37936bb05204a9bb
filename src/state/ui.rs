//! Transient UI chrome state.
//!
//! Keeps modal visibility out of domain state (`feed`, `chat`) so page logic
//! does not depend on presentation toggles.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for app-level chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// The "request a category" modal launched from the header.
    pub category_request_open: bool,
    /// The mobile nav drawer.
    pub nav_open: bool,
}
