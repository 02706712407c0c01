//! Request a password reset code by email.

use contract::ForgotPasswordForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::actions;
use session::messages::Operation;
use session::validate::ValidationErrors;

use crate::components::field::{Field, field_error, keep_field_errors};
use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeState, report};
use crate::util::task::spawn;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ForgotPasswordForm { email: email.get_untracked().trim().to_owned() };
        let api = api.clone();
        let navigate = navigate.clone();
        spawn(async move {
            let result = actions::auth::forgot_password(&api.client, &SignalCell(busy), &form).await;
            keep_field_errors(errors, &result);
            report(notices, Operation::ForgotPassword, &result);
            if result.is_ok() {
                navigate("/reset-password", Default::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Forgot password"</h1>
                <p>"Enter the email of your account and we will send you a reset code."</p>
                <Field label="Email" name="email" kind="email" value=email error=field_error(errors, "email")/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send reset code" }}
                </button>
                <p class="auth-card__links">
                    <a href="/signin">"Back to sign in"</a>
                </p>
            </form>
        </section>
    }
}
