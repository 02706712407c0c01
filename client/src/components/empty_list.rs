//! Empty-state panel with an optional call to action.

use leptos::prelude::*;

#[component]
pub fn EmptyList(
    title: &'static str,
    description: &'static str,
    #[prop(optional)] action: Option<(&'static str, Callback<()>)>,
) -> impl IntoView {
    view! {
        <div class="empty-list">
            <h2 class="empty-list__title">{title}</h2>
            <p class="empty-list__description">{description}</p>
            {action.map(|(label, on_click)| {
                view! {
                    <button class="btn btn--primary" type="button" on:click=move |_| on_click.run(())>
                        {label}
                    </button>
                }
            })}
        </div>
    }
}
