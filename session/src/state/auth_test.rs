use super::*;
use crate::testing::sample_user;

#[test]
fn starts_signed_out_and_loading() {
    let state = AuthState::default();
    assert!(state.user().is_none());
    assert!(!state.is_authenticated());
    assert!(state.is_loading_user());
    assert!(!state.is_logging_out());
}

#[test]
fn set_user_replaces_wholesale() {
    let mut state = AuthState::default();
    state.set_user(sample_user());
    let renamed = User { fullname: "Ada King".to_owned(), ..sample_user() };
    state.set_user(renamed.clone());
    assert_eq!(state.user(), Some(&renamed));
    state.clear_user();
    assert!(!state.is_authenticated());
}

#[test]
fn initial_load_clears_once_and_stays_cleared() {
    let mut state = AuthState::default();
    state.finish_initial_load();
    state.begin_logout();
    state.end_logout();
    state.finish_initial_load();
    assert!(!state.is_loading_user());
}
