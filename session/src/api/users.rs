//! `/api/users` endpoints.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use contract::{
    CreateAccountForm, ForgotPasswordForm, LoginForm, ResetPasswordForm, UpdateAccountForm, UpdatePasswordForm, User,
};

use super::{payload, unit};
use crate::client::AuthedClient;
use crate::error::ApiError;
use crate::transport::{ApiRequest, Transport};

pub const USERS: &str = "/api/users";
pub const SIGN_IN: &str = "/api/users/signin";
pub const PROFILE: &str = "/api/users/profile";
pub const LOGOUT: &str = "/api/users/logout";
pub const PASSWORD: &str = "/api/users/password";
pub const FORGOT_PASSWORD: &str = "/api/users/forgot-password";
pub const RESET_PASSWORD: &str = "/api/users/reset-password";

/// # Errors
///
/// Any [`ApiError`]; `EMAIL_IN_USE` arrives as a rejection.
pub async fn create_account<T: Transport>(client: &AuthedClient<T>, form: &CreateAccountForm) -> Result<User, ApiError> {
    let response = client.send(ApiRequest::post(USERS).json(form)?).await?;
    payload(&response)
}

/// # Errors
///
/// Any [`ApiError`]; bad credentials arrive as `UNABLE_TO_LOGIN`.
pub async fn sign_in<T: Transport>(client: &AuthedClient<T>, form: &LoginForm) -> Result<User, ApiError> {
    let response = client.send(ApiRequest::post(SIGN_IN).json(form)?).await?;
    payload(&response)
}

/// # Errors
///
/// Any [`ApiError`]; a missing session is a rejection.
pub async fn fetch_profile<T: Transport>(client: &AuthedClient<T>) -> Result<User, ApiError> {
    let response = client.send(ApiRequest::get(PROFILE)).await?;
    payload(&response)
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn logout<T: Transport>(client: &AuthedClient<T>) -> Result<(), ApiError> {
    let response = client.send(ApiRequest::post(LOGOUT)).await?;
    unit(&response)
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn update_account<T: Transport>(client: &AuthedClient<T>, form: &UpdateAccountForm) -> Result<User, ApiError> {
    let response = client.send(ApiRequest::put(USERS).json(form)?).await?;
    payload(&response)
}

/// # Errors
///
/// Any [`ApiError`]; a wrong current password arrives as `PASSWORD_DOES_NOT_MATCH`.
pub async fn update_password<T: Transport>(client: &AuthedClient<T>, form: &UpdatePasswordForm) -> Result<(), ApiError> {
    let response = client.send(ApiRequest::patch(PASSWORD).json(form)?).await?;
    unit(&response)
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn forgot_password<T: Transport>(client: &AuthedClient<T>, form: &ForgotPasswordForm) -> Result<(), ApiError> {
    let response = client.send(ApiRequest::post(FORGOT_PASSWORD).json(form)?).await?;
    unit(&response)
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn reset_password<T: Transport>(client: &AuthedClient<T>, form: &ResetPasswordForm) -> Result<(), ApiError> {
    let response = client.send(ApiRequest::post(RESET_PASSWORD).json(form)?).await?;
    unit(&response)
}
