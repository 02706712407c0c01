//! `/api/resources` endpoints.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use contract::{Page, Resource};

use super::{page, payload, unit};
use crate::client::AuthedClient;
use crate::error::ApiError;
use crate::transport::{ApiRequest, Transport, VideoUpload};

pub const RESOURCES: &str = "/api/resources";

fn list_path(page: u32, items_per_page: u32) -> String {
    format!("{RESOURCES}?itemsPerPage={items_per_page}&page={page}")
}

fn item_path(id: &str) -> String {
    format!("{RESOURCES}/{id}")
}

fn retry_path(id: &str) -> String {
    format!("{RESOURCES}/retry/{id}")
}

/// Fetch one page of the signed-in user's resources. Pages start at 1.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn list<T: Transport>(client: &AuthedClient<T>, page_number: u32, items_per_page: u32) -> Result<Page<Resource>, ApiError> {
    let response = client.send(ApiRequest::get(list_path(page_number, items_per_page))).await?;
    page(&response)
}

/// Upload a video as multipart `name` + `video`.
///
/// # Errors
///
/// Any [`ApiError`]; the server's upload checks arrive as `MULTER_*` codes.
pub async fn create<T: Transport>(client: &AuthedClient<T>, upload: VideoUpload) -> Result<Resource, ApiError> {
    let response = client.send(ApiRequest::post(RESOURCES).upload(upload)).await?;
    payload(&response)
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn get<T: Transport>(client: &AuthedClient<T>, id: &str) -> Result<Resource, ApiError> {
    let response = client.send(ApiRequest::get(item_path(id))).await?;
    payload(&response)
}

/// # Errors
///
/// Any [`ApiError`].
pub async fn delete<T: Transport>(client: &AuthedClient<T>, id: &str) -> Result<(), ApiError> {
    let response = client.send(ApiRequest::delete(item_path(id))).await?;
    unit(&response)
}

/// Queue a failed conversion again.
///
/// # Errors
///
/// Any [`ApiError`]; finished or running conversions are rejected.
pub async fn retry<T: Transport>(client: &AuthedClient<T>, id: &str) -> Result<(), ApiError> {
    let response = client.send(ApiRequest::post(retry_path(id))).await?;
    unit(&response)
}
