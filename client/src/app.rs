//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the two process-wide containers (auth and resource list) plus the
//! notice queue, each in an `RwSignal` provided as context. The start-up
//! profile fetch runs once here; until it settles the router is not
//! rendered at all, so guards never see a half-known session.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use session::ClientConfig;
use session::actions;
use session::state::{AuthState, ResourceListState};

use crate::components::guards::{OnlyPublic, RequireAuth};
use crate::components::loading::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::components::notice_toast::NoticeToast;
use crate::net::Api;
use crate::pages::{
    forgot_password::ForgotPasswordPage, help::HelpPage, home::HomePage, landing::LandingPage,
    not_found::NotFoundPage, profile::ProfilePage, reset_password::ResetPasswordPage, resource::ResourcePage,
    signin::SignInPage, signup::SignUpPage,
};
use crate::state::SignalCell;
use crate::state::notice::NoticeState;
use crate::util::task::spawn;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let resources = RwSignal::new(ResourceListState::default());
    let notices = RwSignal::new(NoticeState::default());
    let api = Api::new(ClientConfig::default());

    provide_context(auth);
    provide_context(resources);
    provide_context(notices);
    provide_context(api.clone());

    spawn(async move {
        if actions::auth::fetch_profile(&api.client, &SignalCell(auth)).await.is_err() {
            log::debug!("app: starting signed out");
        }
    });

    view! {
        <Title text="Vidaudio"/>
        <Show
            when=move || !auth.with(AuthState::is_loading_user)
            fallback=|| view! { <LoadingScreen/> }
        >
            <Router>
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=LandingPage/>
                        <Route path=StaticSegment("help") view=HelpPage/>

                        <Route path=StaticSegment("signin") view=|| view! { <OnlyPublic><SignInPage/></OnlyPublic> }/>
                        <Route path=StaticSegment("signup") view=|| view! { <OnlyPublic><SignUpPage/></OnlyPublic> }/>
                        <Route
                            path=StaticSegment("forgot-password")
                            view=|| view! { <OnlyPublic><ForgotPasswordPage/></OnlyPublic> }
                        />
                        <Route
                            path=StaticSegment("reset-password")
                            view=|| view! { <OnlyPublic><ResetPasswordPage/></OnlyPublic> }
                        />

                        <Route path=StaticSegment("home") view=|| view! { <RequireAuth><HomePage/></RequireAuth> }/>
                        <Route path=StaticSegment("profile") view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }/>
                        <Route
                            path=(StaticSegment("resource"), ParamSegment("id"))
                            view=|| view! { <RequireAuth><ResourcePage/></RequireAuth> }
                        />
                    </Routes>
                </main>
            </Router>
        </Show>
        <NoticeToast/>
    }
}
