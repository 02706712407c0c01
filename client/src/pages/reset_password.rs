//! Set a new password with the emailed reset code.
//!
//! The code field is pre-filled from a `?code=` query parameter so the link
//! in the email lands on a ready form.

use contract::ResetPasswordForm;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use session::actions;
use session::guards::SIGN_IN_PATH;
use session::messages::Operation;
use session::validate::ValidationErrors;

use crate::components::field::{Field, field_error, keep_field_errors};
use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeState, report};
use crate::util::task::spawn;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let query = use_query_map();

    let code = RwSignal::new(query.with_untracked(|q| q.get("code").unwrap_or_default()));
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ResetPasswordForm {
            code: code.get_untracked().trim().to_owned(),
            password: password.get_untracked().into(),
            confirm_password: confirm.get_untracked().into(),
        };
        let api = api.clone();
        let navigate = navigate.clone();
        spawn(async move {
            let result = actions::auth::reset_password(&api.client, &SignalCell(busy), &form).await;
            keep_field_errors(errors, &result);
            report(notices, Operation::ResetPassword, &result);
            if result.is_ok() {
                navigate(SIGN_IN_PATH, Default::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Reset password"</h1>
                <Field label="Reset code" name="code" value=code error=field_error(errors, "code")/>
                <Field label="New password" name="password" kind="password" value=password error=field_error(errors, "password")/>
                <Field
                    label="Confirm new password"
                    name="confirmPassword"
                    kind="password"
                    value=confirm
                    error=field_error(errors, "confirmPassword")
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Reset password" }}
                </button>
                <p class="auth-card__links">
                    <a href="/forgot-password">"Request a new code"</a>
                </p>
            </form>
        </section>
    }
}
