//! Reading the video picked in a file input.
//!
//! Metadata is read on selection so the upload form can validate size and
//! type without touching the bytes. The bytes are only read on submit.
//! Requires a browser environment; native builds see no file.

use leptos::html::Input;
use leptos::prelude::*;
use session::VideoUpload;
use session::transport::VideoMeta;

/// Metadata of the first file in `input`.
#[cfg(feature = "csr")]
pub fn picked_video(input: NodeRef<Input>) -> Option<VideoMeta> {
    let file = input.get_untracked()?.files()?.get(0)?;
    Some(meta(&file))
}

#[cfg(not(feature = "csr"))]
pub fn picked_video(input: NodeRef<Input>) -> Option<VideoMeta> {
    let _ = input;
    None
}

/// Read the first file in `input` into an upload titled `title`.
#[cfg(feature = "csr")]
pub async fn read_upload(title: String, input: NodeRef<Input>) -> Option<VideoUpload> {
    let file = input.get_untracked()?.files()?.get(0)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await.ok()?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let meta = meta(&file);
    Some(VideoUpload::new(title, meta.file_name, meta.content_type, bytes))
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::unused_async)]
pub async fn read_upload(title: String, input: NodeRef<Input>) -> Option<VideoUpload> {
    let _ = (title, input);
    None
}

#[cfg(feature = "csr")]
fn meta(file: &web_sys::File) -> VideoMeta {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size() as u64;
    VideoMeta { file_name: file.name(), content_type: file.type_(), size }
}
