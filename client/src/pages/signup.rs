//! Account creation page. A successful sign-up signs the user in.

use contract::CreateAccountForm;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::actions;
use session::guards::HOME_PATH;
use session::messages::Operation;
use session::state::AuthState;
use session::validate::ValidationErrors;

use crate::components::field::{Field, field_error, keep_field_errors};
use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeState, report};
use crate::util::task::spawn;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let fullname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = CreateAccountForm {
            fullname: fullname.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            password: password.get_untracked().into(),
            confirm_password: confirm.get_untracked().into(),
        };
        let api = api.clone();
        let navigate = navigate.clone();
        spawn(async move {
            let result = actions::auth::sign_up(&api.client, &SignalCell(auth), &SignalCell(busy), &form).await;
            keep_field_errors(errors, &result);
            report(notices, Operation::SignUp, &result);
            if result.is_ok() {
                navigate(HOME_PATH, Default::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create your account"</h1>
                <Field label="Full name" name="fullname" value=fullname error=field_error(errors, "fullname")/>
                <Field label="Email" name="email" kind="email" value=email error=field_error(errors, "email")/>
                <Field label="Password" name="password" kind="password" value=password error=field_error(errors, "password")/>
                <Field
                    label="Confirm password"
                    name="confirmPassword"
                    kind="password"
                    value=confirm
                    error=field_error(errors, "confirmPassword")
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
                <p class="auth-card__links">
                    "Already registered? "
                    <a href="/signin">"Sign in"</a>
                </p>
            </form>
        </section>
    }
}
