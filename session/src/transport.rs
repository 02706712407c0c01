//! HTTP transport seam.
//!
//! The session layer never talks to a concrete HTTP stack. The browser build
//! plugs in a `fetch`-backed transport, the CLI plugs in `reqwest`, and tests
//! plug in a scripted one. Session credentials ride along ambiently (cookies),
//! so a transport only has to keep its cookie store attached to every call.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Metadata of a video file picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoMeta {
    pub file_name: String,
    pub content_type: String,
    pub size: u64,
}

/// Multipart body of `POST /api/resources`: a title plus the video bytes.
///
/// Bytes are shared so that replaying the request after a token refresh does
/// not copy the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoUpload {
    pub title: String,
    pub file: VideoMeta,
    pub bytes: Arc<[u8]>,
}

impl VideoUpload {
    #[must_use]
    pub fn new(title: impl Into<String>, file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        Self {
            title: title.into(),
            file: VideoMeta {
                file_name: file_name.into(),
                content_type: content_type.into(),
                size: bytes.len() as u64,
            },
            bytes,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Upload(VideoUpload),
}

/// A fully described request that can be issued, and re-issued, verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path plus query, relative to the configured base URL.
    pub path: String,
    pub body: RequestBody,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: RequestBody::Empty }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if `body` cannot be represented as JSON.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self, serde_json::Error> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    #[must_use]
    pub fn upload(mut self, upload: VideoUpload) -> Self {
        self.body = RequestBody::Upload(upload);
        self
    }
}

/// Status and body text of a received response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be built or sent (network down, CORS, DNS, ...).
    #[error("request could not be sent: {0}")]
    Send(String),
    /// Headers arrived but the body could not be read.
    #[error("response body could not be read: {0}")]
    Body(String),
    /// This build has no HTTP stack.
    #[error("no HTTP transport available in this build")]
    Unavailable,
}

/// Sends one request and returns whatever the server replied, whatever its status.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> impl Future<Output = Result<RawResponse, TransportError>>;
}
