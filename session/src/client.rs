//! Authenticated request client.
//!
//! Wraps a [`Transport`] with a response interceptor: when a reply carries
//! `ACCESS_TOKEN_EXPIRED` and the request has not been replayed yet, the
//! client awaits one call to the refresh endpoint and, if that succeeds,
//! re-issues the original request and hands its result to the caller. Every
//! other failure is returned untouched.
//!
//! Concurrent requests that expire at the same time each run their own
//! refresh; there is no coalescing. The interceptor never touches auth state.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use contract::{Code, ErrorCode};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{ApiRequest, RawResponse, Transport};

/// A request together with whether it has already been replayed.
struct Attempt {
    request: ApiRequest,
    retried: bool,
}

impl Attempt {
    fn new(request: ApiRequest) -> Self {
        Self { request, retried: false }
    }

    fn may_refresh(&self, rejection: &Rejection) -> bool {
        !self.retried && rejection.code == Some(ErrorCode::AccessTokenExpired)
    }
}

/// A received response that counts as a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rejection {
    status: u16,
    code: Option<ErrorCode>,
}

impl Rejection {
    /// Non-2xx replies always fail; 2xx replies fail when their envelope
    /// carries an error code.
    fn from_response(response: &RawResponse) -> Option<Self> {
        let code = envelope_code(&response.body);
        if response.is_success_status() {
            match code {
                Some(Code::Error(code)) => Some(Self { status: response.status, code: Some(code) }),
                Some(Code::Success(_)) | None => None,
            }
        } else {
            Some(Self { status: response.status, code: code.and_then(Code::error) })
        }
    }
}

impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected { status: rejection.status, code: rejection.code }
    }
}

#[derive(Deserialize)]
struct CodeOnly {
    code: Code,
}

fn envelope_code(body: &str) -> Option<Code> {
    serde_json::from_str::<CodeOnly>(body).ok().map(|envelope| envelope.code)
}

/// Request client that transparently recovers from expired access tokens.
#[derive(Debug, Clone)]
pub struct AuthedClient<T> {
    transport: T,
    refresh_path: String,
}

impl<T: Transport> AuthedClient<T> {
    #[must_use]
    pub fn new(transport: T, config: &ClientConfig) -> Self {
        Self { transport, refresh_path: config.refresh_path.clone() }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `request`, refreshing the session and replaying it at most once.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives (never
    /// refreshed), or [`ApiError::Rejected`] carrying the failure the caller
    /// would have seen without the interceptor.
    pub async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut attempt = Attempt::new(request);
        loop {
            let response = self.transport.send(&attempt.request).await?;
            let Some(rejection) = Rejection::from_response(&response) else {
                return Ok(response);
            };
            if !attempt.may_refresh(&rejection) {
                log::debug!(
                    "{} {} rejected: status={} code={:?}",
                    attempt.request.method.as_str(),
                    attempt.request.path,
                    rejection.status,
                    rejection.code
                );
                return Err(rejection.into());
            }

            attempt.retried = true;
            if !self.refresh().await {
                return Err(rejection.into());
            }
            log::debug!("access token refreshed; replaying {} {}", attempt.request.method.as_str(), attempt.request.path);
        }
    }

    /// Call the refresh endpoint. `true` only if its envelope reports `SUCCESS`.
    pub async fn refresh(&self) -> bool {
        match self.transport.send(&ApiRequest::post(self.refresh_path.as_str())).await {
            Ok(response) => {
                let refreshed = envelope_code(&response.body).is_some_and(Code::is_success);
                if !refreshed {
                    log::warn!("token refresh rejected: status={}", response.status);
                }
                refreshed
            }
            Err(err) => {
                log::warn!("token refresh failed: {err}");
                false
            }
        }
    }
}
