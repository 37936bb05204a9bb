use super::*;

#[test]
fn default_state_is_logged_out_and_unloaded() {
    let state = AuthState::default();
    assert!(!state.logged_in);
    assert!(!state.loaded);
    assert!(state.nickname.is_none());
}

#[test]
fn from_session_marks_logged_in_and_loaded() {
    let session = AuthSession {
        token: "jwt".to_owned(),
        nickname: "ann".to_owned(),
        role: "USER".to_owned(),
    };
    let state = AuthState::from_session(&session);
    assert!(state.logged_in);
    assert!(state.loaded);
    assert_eq!(state.nickname.as_deref(), Some("ann"));
    assert!(!state.is_admin());
}

#[test]
fn admin_role_is_detected() {
    let session = AuthSession {
        token: "jwt".to_owned(),
        nickname: "root".to_owned(),
        role: "ADMIN".to_owned(),
    };
    assert!(AuthState::from_session(&session).is_admin());
}

#[test]
fn cleared_state_stays_loaded() {
    let state = AuthState::cleared();
    assert!(!state.logged_in);
    assert!(state.loaded);
    assert!(state.role.is_none());
}

// Storage reads are hydrate-only; natively from_storage sees an empty store.
#[test]
fn from_storage_without_browser_is_logged_out_but_loaded() {
    let state = AuthState::from_storage();
    assert!(!state.logged_in);
    assert!(state.loaded);
}
