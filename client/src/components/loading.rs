//! Loading placeholders.

use leptos::prelude::*;

/// Full-page placeholder shown until the start-up profile fetch settles.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" aria-busy="true">
            <p>"Loading..."</p>
        </div>
    }
}

/// Skeleton rows shown while a list is loading.
#[component]
pub fn LoadingSkeleton(#[prop(default = 10)] rows: usize) -> impl IntoView {
    view! {
        <ul class="skeleton" aria-busy="true">
            {(0..rows).map(|_| view! { <li class="skeleton__row"></li> }).collect_view()}
        </ul>
    }
}
