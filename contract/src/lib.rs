//! Shared wire schema for the video-to-audio conversion API.
//!
//! This crate owns the JSON shapes exchanged with the remote API and is
//! consumed by both `session` (browser and native) and `cli`. It carries no
//! transport or state logic: every reply is a [`ResponseEnvelope`] whose
//! `code` decides success, whatever the HTTP status said.

mod codes;
mod entities;
mod envelope;
mod forms;

pub use codes::{Code, ErrorCode, SuccessCode};
pub use entities::{Address, Owner, Resource, ResourceRecord, User, VideoState};
pub use envelope::{Page, ResponseEnvelope};
pub use forms::{
    CreateAccountForm, ForgotPasswordForm, LoginForm, ResetPasswordForm, Secret, UpdateAccountForm,
    UpdatePasswordForm,
};

/// Error returned when a decoded envelope cannot be turned into a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// The envelope's `code` was an error code.
    #[error("envelope reported error code {0}")]
    Rejected(ErrorCode),
    /// A success envelope lacked a field its variant must carry.
    #[error("success envelope is missing `{0}`")]
    MissingField(&'static str),
}
