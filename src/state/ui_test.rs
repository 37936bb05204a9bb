use super::*;

#[test]
fn ui_state_defaults_everything_closed() {
    let state = UiState::default();
    assert!(!state.category_request_open);
    assert!(!state.nav_open);
}
