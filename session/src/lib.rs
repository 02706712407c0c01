//! # session
//!
//! Transport-agnostic core of the video-to-audio client: an authenticated
//! request client that recovers from expired access tokens, the typed API
//! calls built on it, and the two process-wide state containers those calls
//! mutate.
//!
//! ARCHITECTURE
//! ============
//! - `transport` abstracts the HTTP stack (browser `fetch` or `reqwest`).
//! - `client` wraps a transport with the refresh-and-retry-once interceptor.
//! - `api` turns envelopes into typed payloads.
//! - `state` holds `AuthState` and `ResourceListState`.
//! - `actions` are the only code paths that mutate those containers.
//! - `guards`, `messages` and `validate` are pure decision tables used by UIs.

pub mod actions;
pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod guards;
pub mod messages;
pub mod state;
pub mod transport;
pub mod validate;

#[cfg(test)]
mod testing;

pub use client::AuthedClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use transport::{ApiRequest, Method, RawResponse, RequestBody, Transport, TransportError, VideoUpload};
