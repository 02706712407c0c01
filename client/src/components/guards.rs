//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrap a route's page. The decision itself is `session::guards`; this
//! module only turns it into either the children or a history-replacing
//! `<Redirect>`. Re-evaluated whenever auth state changes, so signing in on
//! a public page or logging out on a private one navigates away at once.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use session::guards::{GuardDecision, RequireAuthenticated, RequirePublic, RouteGuard};
use session::state::AuthState;

/// Render children only for a signed-in user.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(RequireAuthenticated, children)
}

/// Render children only when nobody is signed in.
#[component]
pub fn OnlyPublic(children: ChildrenFn) -> impl IntoView {
    guarded(RequirePublic, children)
}

fn guarded(guard: impl RouteGuard + Send + Sync + 'static, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || match auth.with(|state| guard.decide(state)) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect { to, replace } => {
            let options = NavigateOptions { replace, ..NavigateOptions::default() };
            view! { <Redirect path=to options=options/> }.into_any()
        }
    }
}
