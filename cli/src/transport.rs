//! `reqwest`-backed [`Transport`] for the CLI.
//!
//! Cookies set by the server are absorbed into a [`CookieJar`] and replayed
//! on every later request, refresh calls included, so the session layer
//! sees the same ambient credentials a browser would give it.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::multipart::{Form, Part};
use session::{ApiRequest, Method, RawResponse, RequestBody, Transport, TransportError, VideoUpload};

use crate::cookies::CookieJar;

#[derive(Debug)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
    jar: Mutex<CookieJar>,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>, jar: CookieJar) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, base_url: base_url.into(), jar: Mutex::new(jar) })
    }

    /// Snapshot of the cookies held right now, for persisting.
    pub fn cookies(&self) -> CookieJar {
        self.lock().clone()
    }

    pub fn forget_cookies(&self) {
        self.lock().clear();
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    fn lock(&self) -> MutexGuard<'_, CookieJar> {
        self.jar.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.url(&request.path);
        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let mut builder = self.http.request(method(request.method), &url);
        if let Some(cookies) = self.lock().header() {
            builder = builder.header(COOKIE, cookies);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Upload(upload) => builder.multipart(multipart(upload)?),
        };

        let response = builder.send().await.map_err(|e| TransportError::Send(e.to_string()))?;
        let status = response.status().as_u16();
        {
            let mut jar = self.lock();
            for value in response.headers().get_all(SET_COOKIE) {
                if let Ok(value) = value.to_str() {
                    jar.absorb(value);
                }
            }
        }
        let body = response.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(RawResponse::new(status, body))
    }
}

fn method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// `name` + `video` parts, matching what the browser form sends.
fn multipart(upload: &VideoUpload) -> Result<Form, TransportError> {
    let video = Part::bytes(upload.bytes.to_vec())
        .file_name(upload.file.file_name.clone())
        .mime_str(&upload.file.content_type)
        .map_err(|e| TransportError::Send(e.to_string()))?;
    Ok(Form::new().text("name", upload.title.clone()).part("video", video))
}
