use std::cell::RefCell;

use contract::ErrorCode;

use super::*;
use crate::testing::{ScriptedTransport, client, err, ok, ok_empty, sample_user, user_json};

fn signed_in() -> RefCell<AuthState> {
    let mut state = AuthState::default();
    state.set_user(sample_user());
    state.finish_initial_load();
    RefCell::new(state)
}

fn credentials() -> LoginForm {
    LoginForm { email: "ada@example.com".to_owned(), password: "hunter2".into() }
}

#[tokio::test]
async fn sign_in_success_sets_returned_user() {
    let authed = client(ScriptedTransport::new().reply(200, ok(user_json())));
    let auth = RefCell::new(AuthState::default());
    let loading = RefCell::new(false);

    sign_in(&authed, &auth, &loading, &credentials()).await.unwrap();

    assert_eq!(auth.borrow().user(), Some(&sample_user()));
    assert!(!*loading.borrow());
}

#[tokio::test]
async fn sign_in_with_wrong_password_leaves_user_absent() {
    let authed = client(ScriptedTransport::new().reply(401, err("UNABLE_TO_LOGIN")));
    let auth = RefCell::new(AuthState::default());
    let loading = RefCell::new(false);

    let failure = sign_in(&authed, &auth, &loading, &credentials()).await.unwrap_err();

    assert_eq!(failure.message(), "Unable to login");
    assert!(auth.borrow().user().is_none());
    assert!(!*loading.borrow());
}

#[tokio::test]
async fn invalid_sign_in_form_sends_nothing() {
    let authed = client(ScriptedTransport::new());
    let auth = RefCell::new(AuthState::default());
    let form = LoginForm { email: "not-an-email".to_owned(), password: "hunter2".into() };

    let failure = sign_in(&authed, &auth, &RefCell::new(false), &form).await.unwrap_err();

    assert_eq!(failure.validation().and_then(|v| v.get("email")), Some(validate::NOT_AN_EMAIL));
    assert_eq!(failure.message(), crate::messages::CHECK_FORM);
    assert!(authed.transport().sent().is_empty());
}

#[tokio::test]
async fn sign_up_email_in_use_keeps_state() {
    let authed = client(ScriptedTransport::new().reply(409, err("EMAIL_IN_USE")));
    let auth = RefCell::new(AuthState::default());
    let form = CreateAccountForm {
        fullname: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter2".into(),
        confirm_password: "hunter2".into(),
    };

    let failure = sign_up(&authed, &auth, &RefCell::new(false), &form).await.unwrap_err();
    assert_eq!(failure.message(), "Email already in use");
    assert!(!auth.borrow().is_authenticated());
}

#[tokio::test]
async fn fetch_profile_clears_loading_on_success() {
    let authed = client(ScriptedTransport::new().reply(200, ok(user_json())));
    let auth = RefCell::new(AuthState::default());

    fetch_profile(&authed, &auth).await.unwrap();

    assert!(!auth.borrow().is_loading_user());
    assert!(auth.borrow().is_authenticated());
}

#[tokio::test]
async fn fetch_profile_clears_loading_on_failure() {
    let authed = client(ScriptedTransport::new().reply(401, err("UNEXPECTED_ERROR")));
    let auth = RefCell::new(AuthState::default());

    assert!(fetch_profile(&authed, &auth).await.is_err());
    assert!(!auth.borrow().is_loading_user());
    assert!(!auth.borrow().is_authenticated());
}

#[tokio::test]
async fn fetch_profile_survives_expired_token() {
    let authed = client(
        ScriptedTransport::new()
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .reply(200, ok_empty())
            .reply(200, ok(user_json())),
    );
    let auth = RefCell::new(AuthState::default());

    fetch_profile(&authed, &auth).await.unwrap();
    assert_eq!(auth.borrow().user(), Some(&sample_user()));
}

#[tokio::test]
async fn logout_clears_user_and_flag() {
    let authed = client(ScriptedTransport::new().reply(200, ok_empty()));
    let auth = signed_in();

    logout(&authed, &auth).await.unwrap();

    let state = auth.borrow();
    assert!(!state.is_authenticated());
    assert!(!state.is_logging_out());
    assert!(!state.is_loading_user());
}

#[tokio::test]
async fn failed_logout_keeps_user() {
    let authed = client(ScriptedTransport::new().reply(500, err("UNEXPECTED_ERROR")));
    let auth = signed_in();

    let failure = logout(&authed, &auth).await.unwrap_err();

    assert_eq!(failure.message(), "Unable to logout");
    assert!(auth.borrow().is_authenticated());
    assert!(!auth.borrow().is_logging_out());
}

#[tokio::test]
async fn update_account_replaces_user() {
    let updated = contract::User { fullname: "Ada King".to_owned(), ..sample_user() };
    let authed = client(ScriptedTransport::new().reply(200, ok(serde_json::to_value(&updated).unwrap())));
    let auth = signed_in();
    let form = UpdateAccountForm { fullname: "Ada King".to_owned(), ..UpdateAccountForm::default() };

    update_account(&authed, &auth, &RefCell::new(false), &form).await.unwrap();
    assert_eq!(auth.borrow().user(), Some(&updated));
}

#[tokio::test]
async fn update_password_does_not_touch_user() {
    let authed = client(ScriptedTransport::new().reply(400, err("PASSWORD_DOES_NOT_MATCH")));
    let form = UpdatePasswordForm {
        old_password: "wrong".into(),
        new_password: "newpass".into(),
        confirm_new_password: "newpass".into(),
    };

    let failure = update_password(&authed, &RefCell::new(false), &form).await.unwrap_err();
    assert_eq!(failure.source.code(), Some(ErrorCode::PasswordDoesNotMatch));
    assert_eq!(failure.message(), "Wrong current password");
}

#[tokio::test]
async fn reset_password_posts_code() {
    let authed = client(ScriptedTransport::new().reply(200, ok_empty()));
    let form = ResetPasswordForm { code: "123456".to_owned(), password: "newpass".into(), confirm_password: "newpass".into() };

    reset_password(&authed, &RefCell::new(false), &form).await.unwrap();
    assert_eq!(authed.transport().paths(), vec![crate::api::users::RESET_PASSWORD]);
}
