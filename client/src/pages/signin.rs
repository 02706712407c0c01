//! Sign-in page.

use contract::LoginForm;
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
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked().trim().to_owned(), password: password.get_untracked().into() };
        let api = api.clone();
        let navigate = navigate.clone();
        spawn(async move {
            let result = actions::auth::sign_in(&api.client, &SignalCell(auth), &SignalCell(busy), &form).await;
            keep_field_errors(errors, &result);
            report(notices, Operation::SignIn, &result);
            if result.is_ok() {
                navigate(HOME_PATH, Default::default());
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <Field label="Email" name="email" kind="email" value=email error=field_error(errors, "email")/>
                <Field label="Password" name="password" kind="password" value=password error=field_error(errors, "password")/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-card__links">
                    <a href="/forgot-password">"Forgot your password?"</a>
                    " · "
                    <a href="/signup">"Create an account"</a>
                </p>
            </form>
        </section>
    }
}
