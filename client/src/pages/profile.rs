//! Account details and password change.

use contract::{UpdateAccountForm, UpdatePasswordForm};
use leptos::prelude::*;
use session::actions;
use session::messages::Operation;
use session::state::AuthState;
use session::validate::ValidationErrors;

use crate::components::field::{Field, field_error, keep_field_errors};
use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeState, report};
use crate::util::task::spawn;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = move || auth.with(|a| a.user().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <section class="profile-page">
            <h1>"Profile"</h1>
            <p class="profile-page__email">{email}</p>
            <AccountForm/>
            <PasswordForm/>
        </section>
    }
}

#[component]
fn AccountForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();

    let current = auth.with_untracked(|a| a.user().map(UpdateAccountForm::from_user).unwrap_or_default());
    let fullname = RwSignal::new(current.fullname);
    let country = RwSignal::new(current.country);
    let city = RwSignal::new(current.city);
    let street = RwSignal::new(current.street);
    let errors = RwSignal::new(None::<ValidationErrors>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = UpdateAccountForm {
            fullname: fullname.get_untracked().trim().to_owned(),
            country: country.get_untracked().trim().to_owned(),
            city: city.get_untracked().trim().to_owned(),
            street: street.get_untracked().trim().to_owned(),
        };
        let api = api.clone();
        spawn(async move {
            let result = actions::auth::update_account(&api.client, &SignalCell(auth), &SignalCell(busy), &form).await;
            keep_field_errors(errors, &result);
            report(notices, Operation::UpdateAccount, &result);
        });
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <h2>"Account"</h2>
            <Field label="Full name" name="fullname" value=fullname error=field_error(errors, "fullname")/>
            <Field label="Country" name="country" value=country error=field_error(errors, "country")/>
            <Field label="City" name="city" value=city error=field_error(errors, "city")/>
            <Field label="Street" name="street" value=street error=field_error(errors, "street")/>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}

#[component]
fn PasswordForm() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let errors = RwSignal::new(None::<ValidationErrors>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = UpdatePasswordForm {
            old_password: old_password.get_untracked().into(),
            new_password: new_password.get_untracked().into(),
            confirm_new_password: confirm.get_untracked().into(),
        };
        let api = api.clone();
        spawn(async move {
            let result = actions::auth::update_password(&api.client, &SignalCell(busy), &form).await;
            keep_field_errors(errors, &result);
            report(notices, Operation::UpdatePassword, &result);
            if result.is_ok() {
                for field in [old_password, new_password, confirm] {
                    field.set(String::new());
                }
            }
        });
    };

    view! {
        <form class="profile-form" on:submit=on_submit>
            <h2>"Password"</h2>
            <Field
                label="Current password"
                name="oldPassword"
                kind="password"
                value=old_password
                error=field_error(errors, "oldPassword")
            />
            <Field
                label="New password"
                name="newPassword"
                kind="password"
                value=new_password
                error=field_error(errors, "newPassword")
            />
            <Field
                label="Confirm new password"
                name="confirmNewPassword"
                kind="password"
                value=confirm
                error=field_error(errors, "confirmNewPassword")
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Change password" }}
            </button>
        </form>
    }
}
