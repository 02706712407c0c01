//! Public landing page.

use leptos::prelude::*;
use session::state::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.with(AuthState::is_authenticated);

    view! {
        <section class="landing">
            <h1>"Turn your videos into audio"</h1>
            <p class="landing__lead">
                "Upload a video, we extract the soundtrack. Listen to it here or download it when it is ready."
            </p>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a class="btn btn--primary" href="/signup">"Get started"</a>
                        <a class="btn" href="/signin">"Sign in"</a>
                    }
                }
            >
                <a class="btn btn--primary" href="/home">"Go to my videos"</a>
            </Show>
        </section>
    }
}
