//! Previous / numbered / next page controls.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Page before `page`, if any.
pub fn previous_page(page: u32) -> Option<u32> {
    (page > 1).then(|| page - 1)
}

/// Page after `page`, if `total_pages` has one.
pub fn next_page(page: u32, total_pages: u32) -> Option<u32> {
    (page < total_pages).then(|| page + 1)
}

#[component]
pub fn Pagination(page: RwSignal<u32>, #[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    let go = move |target: Option<u32>| {
        if let Some(target) = target {
            page.set(target);
        }
    };

    view! {
        <nav class="pagination">
            <button
                class="pagination__step"
                type="button"
                disabled=move || previous_page(page.get()).is_none()
                on:click=move |_| go(previous_page(page.get_untracked()))
            >
                "Previous"
            </button>
            <span class="pagination__pages">
                {move || {
                    (1..=total_pages.get())
                        .map(|n| {
                            view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--current=move || page.get() == n
                                    type="button"
                                    on:click=move |_| page.set(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </span>
            <button
                class="pagination__step"
                type="button"
                disabled=move || next_page(page.get(), total_pages.get()).is_none()
                on:click=move |_| go(next_page(page.get_untracked(), total_pages.get_untracked()))
            >
                "Next"
            </button>
        </nav>
    }
}
