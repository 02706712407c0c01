//! Process-wide state containers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application holds exactly two shared mutable values: [`AuthState`]
//! and [`ResourceListState`]. Both keep their fields private and expose a
//! fixed set of transitions; nothing outside these types writes them.
//!
//! Front ends decide where the containers live. The browser keeps them in
//! reactive signals, the CLI and tests keep them in a `RefCell`. Actions only
//! see the [`StateCell`] seam, so every transition is one synchronous closure
//! no matter which storage is behind it.


pub mod auth;
pub mod resources;

use std::cell::RefCell;

pub use auth::AuthState;
pub use resources::ResourceListState;

/// Shared storage that can apply one synchronous transition at a time.
pub trait StateCell<S> {
    fn update(&self, f: impl FnOnce(&mut S));
}

impl<S> StateCell<S> for RefCell<S> {
    fn update(&self, f: impl FnOnce(&mut S)) {
        f(&mut self.borrow_mut());
    }
}

/// Raises a busy flag on creation and lowers it on drop, so the flag clears
/// on every exit path of an action.
#[must_use = "the flag is lowered as soon as the guard drops"]
pub struct Pending<F: FnMut(bool)> {
    set: F,
}

impl<F: FnMut(bool)> Pending<F> {
    #[must_use]
    pub fn start(mut set: F) -> Self {
        set(true);
        Self { set }
    }
}

impl<F: FnMut(bool)> Drop for Pending<F> {
    fn drop(&mut self) {
        (self.set)(false);
    }
}

/// [`Pending`] over a plain boolean cell, the per-call loading flag forms bind to.
pub fn busy(flag: &impl StateCell<bool>) -> Pending<impl FnMut(bool) + '_> {
    Pending::start(move |on| flag.update(|b| *b = on))
}
