//! Top navigation bar.
//!
//! Signed-in users get their pages, avatar initials and a logout button;
//! visitors get the sign-in and sign-up links.

use leptos::prelude::*;
use session::actions;
use session::messages::Operation;
use session::state::AuthState;

use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeState, report};
use crate::util::task::spawn;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();

    let signed_in = move || auth.with(AuthState::is_authenticated);
    let initials = move || auth.with(|a| a.user().map(contract::User::initials).unwrap_or_default());

    let on_logout = move |_| {
        if auth.with_untracked(AuthState::is_logging_out) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let result = actions::auth::logout(&api.client, &SignalCell(auth)).await;
            report(notices, Operation::Logout, &result);
        });
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=move || if signed_in() { "/home" } else { "/" }>"Vidaudio"</a>
            <span class="navbar__spacer"></span>
            <a class="navbar__link" href="/help">"Help"</a>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a class="navbar__link" href="/signin">"Sign in"</a>
                        <a class="btn btn--primary" href="/signup">"Sign up"</a>
                    }
                }
            >
                <a class="navbar__link" href="/home">"My videos"</a>
                <a class="navbar__avatar" href="/profile" title="Profile">{initials}</a>
                <button
                    class="btn navbar__logout"
                    type="button"
                    disabled=move || auth.with(AuthState::is_logging_out)
                    on:click=on_logout.clone()
                >
                    {move || if auth.with(AuthState::is_logging_out) { "Logging out..." } else { "Logout" }}
                </button>
            </Show>
        </nav>
    }
}
