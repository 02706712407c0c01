//! Typed API calls.
//!
//! Each function issues one request through [`AuthedClient`] and turns the
//! reply envelope into a payload. They touch no state; see `actions` for
//! the calls that update the containers.
//!
//! [`AuthedClient`]: crate::AuthedClient


pub mod resources;
pub mod users;

use contract::{Page, ResponseEnvelope};
use serde::de::{DeserializeOwned, IgnoredAny};

use crate::error::ApiError;
use crate::transport::RawResponse;

/// Payload of a success envelope.
fn payload<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    let envelope: ResponseEnvelope<T> = serde_json::from_str(&response.body)?;
    envelope.into_data().map_err(|err| ApiError::from_contract(response.status, err))
}

/// Success envelope whose `data`, if any, is not needed.
fn unit(response: &RawResponse) -> Result<(), ApiError> {
    let envelope: ResponseEnvelope<IgnoredAny> = serde_json::from_str(&response.body)?;
    envelope.into_unit().map_err(|err| ApiError::from_contract(response.status, err))
}

/// Paginated list envelope.
fn page<T: DeserializeOwned>(response: &RawResponse) -> Result<Page<T>, ApiError> {
    let envelope: ResponseEnvelope<Vec<T>> = serde_json::from_str(&response.body)?;
    envelope.into_page().map_err(|err| ApiError::from_contract(response.status, err))
}
