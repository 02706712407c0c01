use super::*;
use crate::testing::sample_user;

fn signed_in() -> AuthState {
    let mut state = AuthState::default();
    state.set_user(sample_user());
    state
}

#[test]
fn authenticated_route_renders_for_user() {
    assert_eq!(RequireAuthenticated.decide(&signed_in()), GuardDecision::Render);
}

#[test]
fn authenticated_route_redirects_to_sign_in_replacing_history() {
    assert_eq!(
        RequireAuthenticated.decide(&AuthState::default()),
        GuardDecision::Redirect { to: SIGN_IN_PATH, replace: true }
    );
}

#[test]
fn public_route_sends_users_home() {
    assert_eq!(RequirePublic.decide(&signed_in()), GuardDecision::Redirect { to: HOME_PATH, replace: true });
    assert_eq!(RequirePublic.decide(&AuthState::default()), GuardDecision::Render);
}

#[test]
fn guards_are_interchangeable() {
    let guards: [&dyn RouteGuard; 2] = [&RequireAuthenticated, &RequirePublic];
    let decisions: Vec<_> = guards.iter().map(|g| g.decide(&AuthState::default())).collect();
    assert_eq!(decisions[1], GuardDecision::Render);
    assert_ne!(decisions[0], decisions[1]);
}
