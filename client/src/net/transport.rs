//! `fetch`-backed [`Transport`] for the browser.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` with
//! `credentials: include`, so the session cookies ride along on every
//! request, refresh calls included.
//! Native builds (tests, tooling): every send fails with
//! [`TransportError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use session::{ApiRequest, RawResponse, Transport, TransportError};

#[derive(Clone, Debug, Default)]
pub struct BrowserTransport {
    base_url: String,
}

impl BrowserTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Transport for BrowserTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            let built = build(&self.url(&request.path), request)?;
            let response = built.send().await.map_err(|e| TransportError::Send(e.to_string()))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
            Ok(RawResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no fetch available for {} {}", request.method.as_str(), self.url(&request.path));
            Err(TransportError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn build(url: &str, request: &ApiRequest) -> Result<gloo_net::http::Request, TransportError> {
    use gloo_net::http::Request;
    use session::{Method, RequestBody};

    let builder = match request.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Patch => Request::patch(url),
        Method::Delete => Request::delete(url),
    }
    .credentials(web_sys::RequestCredentials::Include);

    let built = match &request.body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(value) => builder.json(value),
        RequestBody::Upload(upload) => builder.body(multipart(upload)?),
    };
    built.map_err(|e| TransportError::Send(e.to_string()))
}

/// `name` + `video` form data; the browser sets the multipart boundary.
#[cfg(feature = "csr")]
fn multipart(upload: &session::VideoUpload) -> Result<web_sys::FormData, TransportError> {
    let failed = |e: wasm_bindgen::JsValue| TransportError::Send(format!("{e:?}"));

    let form = web_sys::FormData::new().map_err(failed)?;
    form.append_with_str("name", &upload.title).map_err(failed)?;

    let bytes = js_sys::Uint8Array::from(&upload.bytes[..]);
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(failed)?;
    form.append_with_blob_and_filename("video", &blob, &upload.file.file_name).map_err(failed)?;
    Ok(form)
}
