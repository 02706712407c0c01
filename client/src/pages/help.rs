//! Static help page.

use leptos::prelude::*;
use session::config::ALLOWED_VIDEO_TYPES;

use crate::net::Api;
use crate::util::format::format_size;

const STEPS: [(&str, &str); 4] = [
    ("Upload", "Pick a video and give it a name. Conversion starts right away."),
    ("Converting", "The status badge shows UPLOADED, then CONVERTING while the audio is extracted."),
    ("Listen", "Once COMPLETE, open the video to play the audio track."),
    ("Failed?", "A FAILED conversion can be retried from the list or the detail page."),
];

#[component]
pub fn HelpPage() -> impl IntoView {
    let limit = format_size(expect_context::<Api>().config.max_upload_bytes);
    let formats = ALLOWED_VIDEO_TYPES.join(", ");

    view! {
        <section class="help-page">
            <h1>"Help"</h1>
            <ol class="help-page__steps">
                {STEPS
                    .iter()
                    .map(|(title, text)| view! { <li><strong>{*title}</strong>" "{*text}</li> })
                    .collect_view()}
            </ol>
            <p>{format!("Accepted formats: {formats}. Maximum size: {limit}.")}</p>
            <p>
                "Forgot your password? Request a reset code from the "
                <a href="/forgot-password">"forgot password"</a>
                " page."
            </p>
        </section>
    }
}

