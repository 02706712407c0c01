//! Upload dialog: title plus video file.
//!
//! DESIGN
//! ======
//! The picked file is validated from its metadata (type, size) before any
//! bytes are read, so an oversized file is refused without loading it. The
//! action validates again before sending.

use leptos::html::Input;
use leptos::prelude::*;
use session::actions;
use session::messages::Operation;
use session::state::ResourceListState;
use session::transport::VideoMeta;
use session::validate::{self, ValidationErrors};

use crate::components::field::{Field, field_error};
use crate::net::Api;
use crate::state::SignalCell;
use crate::state::notice::{NoticeKind, NoticeState, report};
use crate::util::file;
use crate::util::format::format_size;
use crate::util::task::spawn;

#[component]
pub fn UploadModal(open: RwSignal<bool>) -> impl IntoView {
    let resources = expect_context::<RwSignal<ResourceListState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let api = expect_context::<Api>();

    let title = RwSignal::new(String::new());
    let picked = RwSignal::new(None::<VideoMeta>);
    let errors = RwSignal::new(None::<ValidationErrors>);
    let busy = RwSignal::new(false);
    let input_ref = NodeRef::<Input>::new();

    let close = move || {
        open.set(false);
        title.set(String::new());
        picked.set(None);
        errors.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let title_value = title.get_untracked().trim().to_owned();
        let meta = picked.get_untracked();
        if let Err(invalid) = validate::upload(&title_value, meta.as_ref(), &api.config) {
            errors.set(Some(invalid));
            return;
        }
        errors.set(None);

        let api = api.clone();
        spawn(async move {
            let Some(upload) = file::read_upload(title_value, input_ref).await else {
                notices.update(|n| {
                    n.push(NoticeKind::Failure, "Could not read the selected file");
                });
                return;
            };
            let result = actions::resources::create_resource(
                &api.client,
                &SignalCell(resources),
                &SignalCell(busy),
                &api.config,
                upload,
            )
            .await;
            report(notices, Operation::CreateResource, &result);
            if result.is_ok() {
                close();
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <form class="dialog dialog--upload" on:submit=on_submit.clone()>
                    <h2>"Upload a video"</h2>
                    <Field label="Name" name="name" value=title error=field_error(errors, "name")/>
                    <label class="field">
                        <span class="field__label">"Video"</span>
                        <input
                            class="field__input"
                            type="file"
                            accept="video/mp4,video/mov,video/avi,video/mkv"
                            node_ref=input_ref
                            on:change=move |_| picked.set(file::picked_video(input_ref))
                        />
                        <span class="field__hint">
                            {move || picked.get().map(|m| format!("{} ({})", m.file_name, format_size(m.size)))}
                        </span>
                        <Show when=move || field_error(errors, "video").get().is_some()>
                            <span class="field__error">{move || field_error(errors, "video").get()}</span>
                        </Show>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Uploading..." } else { "Upload" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
