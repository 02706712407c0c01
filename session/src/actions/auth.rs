//! Account actions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use contract::{CreateAccountForm, ForgotPasswordForm, LoginForm, ResetPasswordForm, UpdateAccountForm, UpdatePasswordForm};

use super::{ActionError, tag};
use crate::api::users;
use crate::client::AuthedClient;
use crate::messages::Operation;
use crate::state::{AuthState, Pending, StateCell, busy};
use crate::transport::Transport;
use crate::validate;

/// Start-up profile fetch.
///
/// Sets the user on success and, whatever happens, clears `loading_user`
/// in the same transition. A failure here just means "signed out".
///
/// # Errors
///
/// Returns the failed call; callers normally ignore it.
pub async fn fetch_profile<T: Transport>(client: &AuthedClient<T>, auth: &impl StateCell<AuthState>) -> Result<(), ActionError> {
    let result = users::fetch_profile(client).await;
    auth.update(|state| {
        if let Ok(user) = &result {
            state.set_user(user.clone());
        }
        state.finish_initial_load();
    });
    tag(Operation::FetchProfile, result.map(drop))
}

/// # Errors
///
/// Validation failures or the rejected call; `user` is left untouched.
pub async fn sign_up<T: Transport>(
    client: &AuthedClient<T>,
    auth: &impl StateCell<AuthState>,
    loading: &impl StateCell<bool>,
    form: &CreateAccountForm,
) -> Result<(), ActionError> {
    tag(Operation::SignUp, validate::create_account(form).map_err(Into::into))?;
    let _busy = busy(loading);
    let user = tag(Operation::SignUp, users::create_account(client, form).await)?;
    auth.update(|state| state.set_user(user));
    Ok(())
}

/// # Errors
///
/// Validation failures or the rejected call; `user` is left untouched.
pub async fn sign_in<T: Transport>(
    client: &AuthedClient<T>,
    auth: &impl StateCell<AuthState>,
    loading: &impl StateCell<bool>,
    form: &LoginForm,
) -> Result<(), ActionError> {
    tag(Operation::SignIn, validate::login(form).map_err(Into::into))?;
    let _busy = busy(loading);
    let user = tag(Operation::SignIn, users::sign_in(client, form).await)?;
    auth.update(|state| state.set_user(user));
    Ok(())
}

/// Sign out. `logging_out` is raised for the duration of the call.
///
/// # Errors
///
/// The rejected call; the user stays signed in.
pub async fn logout<T: Transport>(client: &AuthedClient<T>, auth: &impl StateCell<AuthState>) -> Result<(), ActionError> {
    let _busy = Pending::start(|on| {
        auth.update(|state| if on { state.begin_logout() } else { state.end_logout() });
    });
    tag(Operation::Logout, users::logout(client).await)?;
    auth.update(AuthState::clear_user);
    Ok(())
}

/// # Errors
///
/// Validation failures or the rejected call.
pub async fn update_account<T: Transport>(
    client: &AuthedClient<T>,
    auth: &impl StateCell<AuthState>,
    loading: &impl StateCell<bool>,
    form: &UpdateAccountForm,
) -> Result<(), ActionError> {
    tag(Operation::UpdateAccount, validate::update_account(form).map_err(Into::into))?;
    let _busy = busy(loading);
    let user = tag(Operation::UpdateAccount, users::update_account(client, form).await)?;
    auth.update(|state| state.set_user(user));
    Ok(())
}

/// Change the password. Leaves `user` alone; `Ok` tells the form to reset.
///
/// # Errors
///
/// Validation failures or the rejected call.
pub async fn update_password<T: Transport>(
    client: &AuthedClient<T>,
    loading: &impl StateCell<bool>,
    form: &UpdatePasswordForm,
) -> Result<(), ActionError> {
    tag(Operation::UpdatePassword, validate::update_password(form).map_err(Into::into))?;
    let _busy = busy(loading);
    tag(Operation::UpdatePassword, users::update_password(client, form).await)
}

/// Ask for a reset code by email.
///
/// # Errors
///
/// Validation failures or the rejected call.
pub async fn forgot_password<T: Transport>(
    client: &AuthedClient<T>,
    loading: &impl StateCell<bool>,
    form: &ForgotPasswordForm,
) -> Result<(), ActionError> {
    tag(Operation::ForgotPassword, validate::forgot_password(form).map_err(Into::into))?;
    let _busy = busy(loading);
    tag(Operation::ForgotPassword, users::forgot_password(client, form).await)
}

/// Set a new password using an emailed code. Does not sign in.
///
/// # Errors
///
/// Validation failures or the rejected call.
pub async fn reset_password<T: Transport>(
    client: &AuthedClient<T>,
    loading: &impl StateCell<bool>,
    form: &ResetPasswordForm,
) -> Result<(), ActionError> {
    tag(Operation::ResetPassword, validate::reset_password(form).map_err(Into::into))?;
    let _busy = busy(loading);
    tag(Operation::ResetPassword, users::reset_password(client, form).await)
}
