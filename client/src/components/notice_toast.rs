//! Toast for the latest notice, auto-dismissed after a few seconds.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

#[cfg(feature = "csr")]
const DISMISS_AFTER_MS: u32 = 4000;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let current = move || notices.with(|n| n.current().cloned());

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(id) = notices.with(|n| n.current().map(|notice| notice.id)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            notices.update(|n| n.dismiss(id));
        });
    });

    move || {
        current().map(|notice| {
            let id = notice.id;
            let class = match notice.kind {
                NoticeKind::Success => "toast toast--success",
                NoticeKind::Failure => "toast toast--failure",
            };
            view! {
                <div class=class role="status">
                    <span class="toast__text">{notice.text}</span>
                    <button
                        class="toast__close"
                        type="button"
                        aria-label="Dismiss"
                        on:click=move |_| notices.update(|n| n.dismiss(id))
                    >
                        "✕"
                    </button>
                </div>
            }
        })
    }
}
