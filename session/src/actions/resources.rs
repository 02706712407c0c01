//! Resource actions.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use contract::Resource;

use super::{ActionError, tag};
use crate::api::resources;
use crate::client::AuthedClient;
use crate::config::ClientConfig;
use crate::messages::Operation;
use crate::state::{Pending, ResourceListState, StateCell, busy};
use crate::transport::{Transport, VideoUpload};
use crate::validate;

/// Fetch page `page` and make it the current list. The container's own
/// `loading` flag is raised for the duration.
///
/// # Errors
///
/// The failed call; the previous list stays in place.
pub async fn load_page<T: Transport>(
    client: &AuthedClient<T>,
    list: &impl StateCell<ResourceListState>,
    config: &ClientConfig,
    page: u32,
) -> Result<(), ActionError> {
    let _busy = Pending::start(|on| list.update(|state| state.set_loading(on)));
    let fetched = tag(Operation::ListResources, resources::list(client, page.max(1), config.items_per_page).await)?;
    list.update(|state| state.set_list(fetched));
    Ok(())
}

/// Upload a video and prepend it to the current list.
///
/// The upload is validated against `config` first; an oversized or
/// non-video file never reaches the network.
///
/// # Errors
///
/// Validation failures or the rejected call.
pub async fn create_resource<T: Transport>(
    client: &AuthedClient<T>,
    list: &impl StateCell<ResourceListState>,
    loading: &impl StateCell<bool>,
    config: &ClientConfig,
    upload: VideoUpload,
) -> Result<Resource, ActionError> {
    tag(Operation::CreateResource, validate::upload(&upload.title, Some(&upload.file), config).map_err(Into::into))?;
    let _busy = busy(loading);
    let created = tag(Operation::CreateResource, resources::create(client, upload).await)?;
    list.update(|state| {
        state.insert_at_head(created.clone());
    });
    Ok(created)
}

/// # Errors
///
/// The rejected call; the entry stays listed.
pub async fn delete_resource<T: Transport>(
    client: &AuthedClient<T>,
    list: &impl StateCell<ResourceListState>,
    loading: &impl StateCell<bool>,
    id: &str,
) -> Result<(), ActionError> {
    let _busy = busy(loading);
    tag(Operation::DeleteResource, resources::delete(client, id).await)?;
    list.update(|state| {
        state.remove_by_id(id);
    });
    Ok(())
}

/// Re-queue a failed conversion.
///
/// # Errors
///
/// The rejected call, e.g. when the video already converted.
pub async fn retry_conversion<T: Transport>(
    client: &AuthedClient<T>,
    loading: &impl StateCell<bool>,
    id: &str,
) -> Result<(), ActionError> {
    let _busy = busy(loading);
    tag(Operation::RetryConversion, resources::retry(client, id).await)
}

/// Fetch one resource, refreshing its entry in the list if it is there.
///
/// # Errors
///
/// The rejected call; `NOT_FOUND` means the resource is gone.
pub async fn get_resource<T: Transport>(
    client: &AuthedClient<T>,
    list: &impl StateCell<ResourceListState>,
    loading: &impl StateCell<bool>,
    id: &str,
) -> Result<Resource, ActionError> {
    let _busy = busy(loading);
    let fetched = tag(Operation::GetResource, resources::get(client, id).await)?;
    list.update(|state| {
        state.replace(fetched.clone());
    });
    Ok(fetched)
}
