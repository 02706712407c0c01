//! Confirmation dialog for deleting a resource.

use contract::Resource;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::actions;
use session::messages::Operation;
use session::state::ResourceListState;

use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeState, report};
use crate::util::task::spawn;

/// Asks before deleting `target`; closes by clearing it.
///
/// With `leave_to`, a successful delete navigates there, e.g. off a detail page.
#[component]
pub fn DeleteModal(target: RwSignal<Option<Resource>>, #[prop(optional)] leave_to: Option<&'static str>) -> impl IntoView {
    let resources = expect_context::<RwSignal<ResourceListState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_confirm = move |_| {
        let Some(resource) = target.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        let api = api.clone();
        let navigate = navigate.clone();
        spawn(async move {
            let result =
                actions::resources::delete_resource(&api.client, &SignalCell(resources), &SignalCell(busy), resource.id())
                    .await;
            report(notices, Operation::DeleteResource, &result);
            if result.is_ok() {
                target.set(None);
                if let Some(path) = leave_to {
                    navigate(path, Default::default());
                }
            }
        });
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| target.set(None)>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Delete resource"</h2>
                    <p>
                        "Delete "
                        <strong>{move || target.with(|t| t.as_ref().map(|r| r.resource.name.clone()))}</strong>
                        "? This cannot be undone."
                    </p>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| target.set(None)>"Cancel"</button>
                        <button
                            class="btn btn--danger"
                            type="button"
                            disabled=move || busy.get()
                            on:click=on_confirm.clone()
                        >
                            {move || if busy.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
