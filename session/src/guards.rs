//! Route guard decisions.
//!
//! Guards read [`AuthState`] synchronously on every navigation and never
//! fetch anything themselves; the start-up profile fetch has already
//! settled by the time routing renders.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::state::AuthState;

pub const SIGN_IN_PATH: &str = "/signin";
pub const HOME_PATH: &str = "/home";

/// What a guarded route should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Navigate away; with `replace` the guarded page is not kept in history.
    Redirect { to: &'static str, replace: bool },
}

/// Decide whether to render a route's children or redirect.
pub trait RouteGuard {
    fn decide(&self, auth: &AuthState) -> GuardDecision;
}

/// Signed-in users only; everyone else goes to sign-in.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequireAuthenticated;

impl RouteGuard for RequireAuthenticated {
    fn decide(&self, auth: &AuthState) -> GuardDecision {
        if auth.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect { to: SIGN_IN_PATH, replace: true }
        }
    }
}

/// Signed-out users only; signed-in users go home.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequirePublic;

impl RouteGuard for RequirePublic {
    fn decide(&self, auth: &AuthState) -> GuardDecision {
        if auth.is_authenticated() {
            GuardDecision::Redirect { to: HOME_PATH, replace: true }
        } else {
            GuardDecision::Render
        }
    }
}
