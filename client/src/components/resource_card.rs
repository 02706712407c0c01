//! One row of the resource list.

use contract::Resource;
use leptos::prelude::*;

use crate::util::format::{format_size, format_timestamp, status_badge_class, truncate_name};

const NAME_CHARS: usize = 15;

/// A resource summary with retry and delete affordances.
///
/// Retry is offered for failed conversions only; delete once the
/// conversion has finished either way.
#[component]
pub fn ResourceCard(
    item: Resource,
    on_retry: Callback<String>,
    on_delete: Callback<Resource>,
    #[prop(into)] retrying: Signal<bool>,
) -> impl IntoView {
    let record = &item.resource;
    let href = format!("/resource/{}", record.id);
    let status = record.status;
    let id = record.id.clone();
    let name = truncate_name(&record.name, NAME_CHARS);
    let size = format_size(record.size);
    let uploaded = format_timestamp(&record.created_at);

    view! {
        <li class="resource-card">
            <div class="resource-card__summary">
                <a class="resource-card__name" href=href.clone()>{name}</a>
                <span class=status_badge_class(status)>{status.as_str()}</span>
            </div>
            <p class="resource-card__meta">{format!("Uploaded on {uploaded} · {size}")}</p>
            <div class="resource-card__actions">
                <a class="btn" href=href>"View"</a>
                <Show when=move || status.can_retry()>
                    <button
                        class="btn"
                        type="button"
                        disabled=move || retrying.get()
                        on:click={
                            let id = id.clone();
                            move |_| on_retry.run(id.clone())
                        }
                    >
                        {move || if retrying.get() { "Loading..." } else { "Retry" }}
                    </button>
                </Show>
                <Show when=move || status.is_terminal()>
                    <button
                        class="btn btn--danger"
                        type="button"
                        on:click={
                            let item = item.clone();
                            move |_| on_delete.run(item.clone())
                        }
                    >
                        "Delete"
                    </button>
                </Show>
            </div>
        </li>
    }
}
