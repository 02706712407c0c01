//! Toast notifications.
//!
//! Only the most recent notice is shown; a newer one replaces it. Each
//! notice carries an id so a delayed auto-dismiss cannot close a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;
use session::actions::ActionError;
use session::messages::Operation;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show `text`, replacing whatever is on screen. Returns the notice id.
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice { id: self.next_id, kind, text: text.into() });
        self.next_id
    }

    /// Close notice `id` if it is still the one shown.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    /// Announce the outcome of an action: its failure message, or its
    /// success message when the operation has one.
    pub fn record<T>(&mut self, operation: Operation, result: &Result<T, ActionError>) -> Option<u64> {
        match result {
            Ok(_) => operation.success_message().map(|text| self.push(NoticeKind::Success, text)),
            Err(err) => Some(self.push(NoticeKind::Failure, err.message())),
        }
    }
}

/// [`NoticeState::record`] on the shared notice signal.
pub fn report<T>(notices: RwSignal<NoticeState>, operation: Operation, result: &Result<T, ActionError>) {
    notices.update(|state| {
        state.record(operation, result);
    });
}
