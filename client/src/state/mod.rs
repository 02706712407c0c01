//! Reactive homes for the session containers.
//!
//! DESIGN
//! ======
//! `AuthState` and `ResourceListState` are owned by `session`; here they sit
//! inside `RwSignal`s so views re-render when an action transitions them.
//! [`SignalCell`] is the bridge that lets session actions write a signal.


pub mod notice;

use leptos::prelude::*;
use session::state::StateCell;

/// A signal seen through the session layer's [`StateCell`] seam.
#[derive(Clone, Copy, Debug)]
pub struct SignalCell<S: 'static>(pub RwSignal<S>);

impl<S: Send + Sync + 'static> StateCell<S> for SignalCell<S> {
    fn update(&self, f: impl FnOnce(&mut S)) {
        // A disposed signal means its view is gone; nothing left to update.
        if self.0.try_update(f).is_none() {
            log::debug!("state update skipped: signal disposed");
        }
    }
}
