//! The signed-in user's video list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the shared `ResourceListState`. The page number lives here; an
//! effect re-fetches whenever it changes. Upload and delete go through their
//! modals, which update the list in place; retry re-fetches the current page
//! so the new status shows.

use contract::Resource;
use leptos::prelude::*;
use session::actions;
use session::messages::Operation;
use session::state::ResourceListState;

use crate::components::delete_modal::DeleteModal;
use crate::components::empty_list::EmptyList;
use crate::components::loading::LoadingSkeleton;
use crate::components::pagination::Pagination;
use crate::components::resource_card::ResourceCard;
use crate::components::upload_modal::UploadModal;
use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeState, report};
use crate::util::task::spawn;

#[component]
pub fn HomePage() -> impl IntoView {
    let resources = expect_context::<RwSignal<ResourceListState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();

    let page = RwSignal::new(1_u32);
    let load_failed = RwSignal::new(false);
    let upload_open = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<Resource>);
    let retry_busy = RwSignal::new(false);

    let load = {
        let api = api.clone();
        move |page_number: u32| {
            let api = api.clone();
            spawn(async move {
                let result =
                    actions::resources::load_page(&api.client, &SignalCell(resources), &api.config, page_number).await;
                load_failed.set(result.is_err());
                report(notices, Operation::ListResources, &result);
            });
        }
    };

    Effect::new({
        let load = load.clone();
        move || load(page.get())
    });

    let on_retry = Callback::new({
        let load = load.clone();
        move |id: String| {
            if retry_busy.get_untracked() {
                return;
            }
            let api = api.clone();
            let load = load.clone();
            spawn(async move {
                let result = actions::resources::retry_conversion(&api.client, &SignalCell(retry_busy), &id).await;
                report(notices, Operation::RetryConversion, &result);
                if result.is_ok() {
                    load(page.get_untracked());
                }
            });
        }
    });
    let on_delete = Callback::new(move |item: Resource| delete_target.set(Some(item)));
    let open_upload = Callback::new(move |()| upload_open.set(true));

    let has_list = move || resources.with(|r| r.list().is_some());
    let is_empty = move || resources.with(|r| r.list().is_some_and(|p| p.data.is_empty()));
    let total_pages = Signal::derive(move || resources.with(|r| r.list().map_or(0, |p| p.total_pages)));
    let items = move || resources.with(|r| r.list().map(|p| p.data.clone()).unwrap_or_default());

    view! {
        <section class="home-page">
            <header class="home-page__header">
                <h1>"My videos"</h1>
                <button
                    class="btn"
                    type="button"
                    disabled=move || resources.with(ResourceListState::is_loading)
                    on:click=move |_| load(page.get_untracked())
                >
                    "Refresh"
                </button>
                <button class="btn btn--primary" type="button" on:click=move |_| upload_open.set(true)>
                    "Upload"
                </button>
            </header>

            <Show when=move || resources.with(ResourceListState::is_loading) && !has_list()>
                <LoadingSkeleton/>
            </Show>
            <Show when=move || load_failed.get() && !has_list()>
                <EmptyList title="Could not load your videos" description="Check your connection and refresh."/>
            </Show>
            <Show when=is_empty>
                <EmptyList
                    title="No videos yet"
                    description="Upload a video and we will convert it to audio."
                    action=("Upload a video", open_upload)
                />
            </Show>
            <Show when=move || has_list() && !is_empty()>
                <ul class="resource-list">
                    <For
                        each=items
                        key=|item| (item.resource.id.clone(), item.resource.updated_at.clone())
                        children=move |item| {
                            view! { <ResourceCard item=item on_retry=on_retry on_delete=on_delete retrying=retry_busy/> }
                        }
                    />
                </ul>
                <Pagination page=page total_pages=total_pages/>
            </Show>
        </section>
        <UploadModal open=upload_open/>
        <DeleteModal target=delete_target/>
    }
}
