//! State-mutating operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! An action is what a UI event handler calls: it validates input, issues
//! the typed API call, and applies the outcome to the state containers in a
//! single transition. Actions are the only writers of [`AuthState`] and
//! [`ResourceListState`]. Per-call loading flags are lowered by a
//! [`Pending`] guard, so every exit path clears them.
//!
//! Failures come back as [`ActionError`], whose [`ActionError::message`] is
//! the notification to show. State is left as it was.
//!
//! [`AuthState`]: crate::state::AuthState
//! [`ResourceListState`]: crate::state::ResourceListState
//! [`Pending`]: crate::state::Pending

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod auth;
pub mod resources;

use crate::error::ApiError;
use crate::messages::{CHECK_FORM, Operation};
use crate::validate::ValidationErrors;

/// A failed action, tagged with what was attempted.
#[derive(Debug, thiserror::Error)]
#[error("{operation} failed: {source}")]
pub struct ActionError {
    pub operation: Operation,
    pub source: ApiError,
}

impl ActionError {
    #[must_use]
    pub fn new(operation: Operation, source: ApiError) -> Self {
        Self { operation, source }
    }

    /// Notification text for the user. Never a raw code.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match &self.source {
            ApiError::Invalid(_) => CHECK_FORM,
            other => self.operation.failure_message(other.code()),
        }
    }

    /// Inline field messages, when validation stopped the request.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match &self.source {
            ApiError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Tag `result` with `operation`, logging the failure.
fn tag<T>(operation: Operation, result: Result<T, ApiError>) -> Result<T, ActionError> {
    result.map_err(|source| {
        match &source {
            ApiError::Invalid(_) => log::debug!("{operation}: blocked by validation"),
            _ => log::warn!("{operation} failed: {source}"),
        }
        ActionError::new(operation, source)
    })
}
