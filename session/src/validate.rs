//! Client-side form validation.
//!
//! Failures are reported per field so forms can render them inline; a form
//! that fails validation never reaches the network.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::borrow::Cow;

use contract::{
    CreateAccountForm, ForgotPasswordForm, LoginForm, ResetPasswordForm, Secret, UpdateAccountForm,
    UpdatePasswordForm,
};

use crate::config::ClientConfig;
use crate::format::format_size;
use crate::transport::VideoMeta;

pub const REQUIRED: &str = "This field is required";
pub const NOT_AN_EMAIL: &str = "This should be an email";
pub const PASSWORD_TOO_SHORT: &str = "Must be at least 4 characters long";
pub const PASSWORD_TOO_LONG: &str = "Must be at most 20 characters long";
pub const PASSWORDS_DIFFER: &str = "passwords must match";
pub const NOT_A_VIDEO: &str = "Must be a video";
pub const TITLE_TOO_LONG: &str = "Must be at most 50 characters long";

const PASSWORD_MIN: usize = 4;
const PASSWORD_MAX: usize = 20;
const TITLE_MAX: usize = 50;

/// Message for a video above `limit` bytes, e.g. "Video must be 50 MB maximum".
#[must_use]
pub fn video_too_large(limit: u64) -> String {
    format!("Video must be {} maximum", format_size(limit))
}

/// One inline message for one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: Cow<'static, str>,
}

/// Every field that failed, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} form field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn check(&mut self, field: &'static str, outcome: Result<(), impl Into<Cow<'static, str>>>) {
        if let Err(message) = outcome {
            self.0.push(FieldError { field, message: message.into() });
        }
    }

    fn finish(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn required(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() { Err(REQUIRED) } else { Ok(()) }
}

/// `local@domain.tld`: one `@`, no whitespace, a dot inside the domain.
fn email(value: &str) -> Result<(), &'static str> {
    required(value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(NOT_AN_EMAIL);
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(NOT_AN_EMAIL);
    };
    let dotted = domain.char_indices().any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if local.is_empty() || domain.contains('@') || !dotted {
        return Err(NOT_AN_EMAIL);
    }
    Ok(())
}

fn password(value: &Secret) -> Result<(), &'static str> {
    let value = value.expose();
    if value.is_empty() {
        return Err(REQUIRED);
    }
    let len = value.chars().count();
    if len < PASSWORD_MIN {
        Err(PASSWORD_TOO_SHORT)
    } else if len > PASSWORD_MAX {
        Err(PASSWORD_TOO_LONG)
    } else {
        Ok(())
    }
}

fn confirmation(value: &Secret, original: &Secret) -> Result<(), &'static str> {
    if value.expose().is_empty() {
        Err(REQUIRED)
    } else if value != original {
        Err(PASSWORDS_DIFFER)
    } else {
        Ok(())
    }
}

fn title(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err(REQUIRED);
    }
    if value.chars().count() > TITLE_MAX { Err(TITLE_TOO_LONG) } else { Ok(()) }
}

/// # Errors
///
/// Returns the failing fields of a sign-in form.
pub fn login(form: &LoginForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("email", email(&form.email));
    errors.check("password", password(&form.password));
    errors.finish()
}

/// # Errors
///
/// Returns the failing fields of a sign-up form.
pub fn create_account(form: &CreateAccountForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("fullname", required(&form.fullname));
    errors.check("email", email(&form.email));
    errors.check("password", password(&form.password));
    errors.check("confirmPassword", confirmation(&form.confirm_password, &form.password));
    errors.finish()
}

/// # Errors
///
/// Returns the failing fields of the account form.
pub fn update_account(form: &UpdateAccountForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("fullname", required(&form.fullname));
    errors.finish()
}

/// # Errors
///
/// Returns the failing fields of the change-password form.
pub fn update_password(form: &UpdatePasswordForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("oldPassword", required(form.old_password.expose()));
    errors.check("newPassword", password(&form.new_password));
    errors.check("confirmNewPassword", confirmation(&form.confirm_new_password, &form.new_password));
    errors.finish()
}

/// # Errors
///
/// Returns the failing fields of the forgot-password form.
pub fn forgot_password(form: &ForgotPasswordForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("email", email(&form.email));
    errors.finish()
}

/// # Errors
///
/// Returns the failing fields of the reset-password form.
pub fn reset_password(form: &ResetPasswordForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("code", required(&form.code));
    errors.check("password", password(&form.password));
    errors.check("confirmPassword", confirmation(&form.confirm_password, &form.password));
    errors.finish()
}

/// Validate an upload from file metadata alone, before any bytes are read.
///
/// # Errors
///
/// Returns the failing fields of the upload form.
pub fn upload(title_value: &str, video: Option<&VideoMeta>, config: &ClientConfig) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let video_check: Result<(), Cow<'static, str>> = match video {
        None => Err(REQUIRED.into()),
        Some(meta) if !ClientConfig::is_allowed_video_type(&meta.content_type) => Err(NOT_A_VIDEO.into()),
        Some(meta) if meta.size > config.max_upload_bytes => Err(video_too_large(config.max_upload_bytes).into()),
        Some(_) => Ok(()),
    };
    errors.check("video", video_check);
    errors.check("name", title(title_value));
    errors.finish()
}
