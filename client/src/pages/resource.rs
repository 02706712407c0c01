//! Detail view of one resource, with its player.
//!
//! A completed conversion plays the audio; anything else previews the
//! uploaded video. A `NOT_FOUND` reply renders the not-found state rather
//! than a notice.

use contract::{ErrorCode, Resource, VideoState};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;
use session::actions;
use session::guards::HOME_PATH;
use session::messages::Operation;
use session::state::ResourceListState;

use crate::components::delete_modal::DeleteModal;
use crate::components::empty_list::EmptyList;
use crate::components::loading::LoadingScreen;
use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeState, report};
use crate::util::format::{format_size, format_timestamp, status_badge_class};
use crate::util::task::spawn;

#[derive(Clone, Debug, PartialEq)]
enum Detail {
    Loading,
    Loaded(Box<Resource>),
    Missing,
    Failed,
}

#[component]
pub fn ResourcePage() -> impl IntoView {
    let resources = expect_context::<RwSignal<ResourceListState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();
    let params = use_params_map();

    let detail = RwSignal::new(Detail::Loading);
    let busy = RwSignal::new(false);
    let retry_busy = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Resource>);

    let fetch = {
        let api = api.clone();
        move |id: String| {
            let api = api.clone();
            spawn(async move {
                let result =
                    actions::resources::get_resource(&api.client, &SignalCell(resources), &SignalCell(busy), &id).await;
                match result {
                    Ok(resource) => detail.set(Detail::Loaded(Box::new(resource))),
                    Err(err) if err.source.code() == Some(ErrorCode::NotFound) => detail.set(Detail::Missing),
                    Err(err) => {
                        detail.set(Detail::Failed);
                        report::<()>(notices, Operation::GetResource, &Err(err));
                    }
                }
            });
        }
    };

    let current_id = move || params.with(|p| p.get("id").unwrap_or_default());

    Effect::new({
        let fetch = fetch.clone();
        move || {
            detail.set(Detail::Loading);
            fetch(current_id());
        }
    });

    let on_retry = {
        let fetch = fetch.clone();
        move |_| {
            if retry_busy.get_untracked() {
                return;
            }
            let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
            let api = api.clone();
            let fetch = fetch.clone();
            spawn(async move {
                let result = actions::resources::retry_conversion(&api.client, &SignalCell(retry_busy), &id).await;
                report(notices, Operation::RetryConversion, &result);
                if result.is_ok() {
                    fetch(id);
                }
            });
        }
    };

    let body = move || match detail.get() {
        Detail::Loading => view! { <LoadingScreen/> }.into_any(),
        Detail::Missing => view! {
            <EmptyList title="Resource not found" description="It may have been deleted."/>
            <a class="btn" href=HOME_PATH>"Back to my videos"</a>
        }
        .into_any(),
        Detail::Failed => view! {
            <EmptyList title="Could not load this resource" description="Try again in a moment."/>
        }
        .into_any(),
        Detail::Loaded(resource) => {
            let record = resource.resource.clone();
            let status = record.status;
            let player = match (status, resource.playable_url()) {
                (VideoState::Complete, Some(url)) => view! { <audio controls=true src=url.to_owned()></audio> }.into_any(),
                (_, Some(url)) => view! { <video controls=true src=url.to_owned()></video> }.into_any(),
                (_, None) => view! { <p class="resource-page__no-media">"No media available yet."</p> }.into_any(),
            };
            let target = (*resource).clone();
            let on_retry = on_retry.clone();
            view! {
                <header class="resource-page__header">
                    <h1>{record.name.clone()}</h1>
                    <span class=status_badge_class(status)>{status.as_str()}</span>
                </header>
                <p class="resource-page__meta">
                    {format!("Uploaded on {} · {}", format_timestamp(&record.created_at), format_size(record.size))}
                </p>
                <div class="resource-page__player">{player}</div>
                <div class="resource-page__actions">
                    <Show when=move || status.can_retry()>
                        <button class="btn" type="button" disabled=move || retry_busy.get() on:click=on_retry.clone()>
                            {move || if retry_busy.get() { "Loading..." } else { "Retry conversion" }}
                        </button>
                    </Show>
                    <Show when=move || status.is_terminal()>
                        <button
                            class="btn btn--danger"
                            type="button"
                            on:click={
                                let target = target.clone();
                                move |_| delete_target.set(Some(target.clone()))
                            }
                        >
                            "Delete"
                        </button>
                    </Show>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <section class="resource-page">
            <a class="resource-page__back" href=HOME_PATH>"← My videos"</a>
            {body}
        </section>
        <DeleteModal target=delete_target leave_to=HOME_PATH/>
    }
}
