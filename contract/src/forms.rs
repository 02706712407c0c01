//! Request bodies for the account endpoints.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A password that serializes as-is but never shows up in `Debug` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

/// Body of `POST /api/users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountForm {
    pub fullname: String,
    pub email: String,
    pub password: Secret,
    pub confirm_password: Secret,
}

/// Body of `POST /api/users/signin`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: Secret,
}

/// Body of `PUT /api/users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccountForm {
    pub fullname: String,
    pub country: String,
    pub city: String,
    pub street: String,
}

impl UpdateAccountForm {
    /// Pre-fill the form from the current account.
    #[must_use]
    pub fn from_user(user: &crate::User) -> Self {
        Self {
            fullname: user.fullname.clone(),
            country: user.address.country.clone(),
            city: user.address.city.clone(),
            street: user.address.street.clone(),
        }
    }
}

/// Body of `PATCH /api/users/password`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordForm {
    pub old_password: Secret,
    pub new_password: Secret,
    pub confirm_new_password: Secret,
}

/// Body of `POST /api/users/forgot-password`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

/// Body of `POST /api/users/reset-password`; `code` comes from the emailed link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordForm {
    pub code: String,
    pub password: Secret,
    pub confirm_password: Secret,
}
