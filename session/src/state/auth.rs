//! Authentication state: who is signed in, and whether we know yet.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use contract::User;

/// The current session as seen by the client.
///
/// `user` is present exactly when the client considers itself signed in;
/// route guards read nothing else. `loading_user` starts `true` and is
/// cleared once, when the start-up profile fetch settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    user: Option<User>,
    loading_user: bool,
    logging_out: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading_user: true, logging_out: false }
    }
}

impl AuthState {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// `true` until the start-up profile fetch has settled.
    #[must_use]
    pub fn is_loading_user(&self) -> bool {
        self.loading_user
    }

    #[must_use]
    pub fn is_logging_out(&self) -> bool {
        self.logging_out
    }

    /// Replace the signed-in account wholesale.
    pub fn set_user(&mut self, user: User) {
        log::debug!("auth: signed in as {}", user.id);
        self.user = Some(user);
    }

    pub fn clear_user(&mut self) {
        if self.user.take().is_some() {
            log::debug!("auth: signed out");
        }
    }

    /// Unblock the initial render. Later calls change nothing.
    pub fn finish_initial_load(&mut self) {
        self.loading_user = false;
    }

    pub fn begin_logout(&mut self) {
        self.logging_out = true;
    }

    pub fn end_logout(&mut self) {
        self.logging_out = false;
    }
}
