//! Labelled form input with its inline validation message.

use leptos::prelude::*;
use session::actions::ActionError;
use session::validate::ValidationErrors;

/// Message for `field` from the form's last validation run.
pub fn field_error(errors: RwSignal<Option<ValidationErrors>>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.as_ref().and_then(|e| e.get(field)).map(str::to_owned)))
}

#[component]
pub fn Field(
    label: &'static str,
    name: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                class:field__input--invalid=move || error.get().is_some()
                type=kind
                name=name
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || error.get().is_some()>
                <span class="field__error">{move || error.get().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

/// Show the field messages of a failed submit, or clear them after any other outcome.
pub fn keep_field_errors<T>(errors: RwSignal<Option<ValidationErrors>>, result: &Result<T, ActionError>) {
    errors.set(result.as_ref().err().and_then(ActionError::validation).cloned());
}
