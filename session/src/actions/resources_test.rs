use std::cell::RefCell;

use contract::{Page, VideoState};
use serde_json::json;

use super::*;
use crate::testing::{ScriptedTransport, client, err, ok, ok_empty, resource_json, sample_resource};

fn listed(ids: &[&str]) -> RefCell<ResourceListState> {
    let mut state = ResourceListState::default();
    state.set_list(Page {
        data: ids.iter().map(|id| sample_resource(id, VideoState::Failed)).collect(),
        page: 1,
        items_per_page: 10,
        total_pages: 1,
    });
    RefCell::new(state)
}

#[tokio::test]
async fn load_page_two_of_three() {
    let data: Vec<_> = (0..10).map(|i| resource_json(&format!("r-{i}"), VideoState::Complete)).collect();
    let authed = client(ScriptedTransport::new().reply(
        200,
        json!({"code": "SUCCESS", "data": data, "page": 2, "itemsPerPage": 10, "totalPages": 3}),
    ));
    let list = RefCell::new(ResourceListState::default());

    load_page(&authed, &list, &ClientConfig::default(), 2).await.unwrap();

    let state = list.borrow();
    let page = state.list().unwrap();
    assert!(page.data.len() <= 10);
    assert_eq!((page.page, page.total_pages), (2, 3));
    assert!(!state.is_loading());
}

#[tokio::test]
async fn failed_load_keeps_previous_list() {
    let authed = client(ScriptedTransport::new().reply(500, err("UNEXPECTED_ERROR")));
    let list = listed(&["a"]);

    let failure = load_page(&authed, &list, &ClientConfig::default(), 1).await.unwrap_err();

    assert_eq!(failure.message(), "Unexpected error occurred");
    assert_eq!(list.borrow().list().unwrap().data.len(), 1);
    assert!(!list.borrow().is_loading());
}

#[tokio::test]
async fn oversized_upload_is_rejected_before_sending() {
    let authed = client(ScriptedTransport::new());
    let list = listed(&[]);
    let upload = VideoUpload::new("big", "big.mp4", "video/mp4", vec![0; 60 * 1024 * 1024]);

    let failure = create_resource(&authed, &list, &RefCell::new(false), &ClientConfig::default(), upload)
        .await
        .unwrap_err();

    let limit = validate::video_too_large(ClientConfig::default().max_upload_bytes);
    assert_eq!(failure.validation().and_then(|v| v.get("video")), Some(limit.as_str()));
    assert!(authed.transport().sent().is_empty());
}

#[tokio::test]
async fn created_resource_goes_to_the_head() {
    let authed = client(ScriptedTransport::new().reply(201, ok(resource_json("new", VideoState::Uploaded))));
    let list = listed(&["a", "b"]);
    let upload = VideoUpload::new("clip", "clip.mov", "video/mov", vec![1, 2, 3]);

    let created = create_resource(&authed, &list, &RefCell::new(false), &ClientConfig::default(), upload)
        .await
        .unwrap();

    assert_eq!(created.id(), "new");
    assert_eq!(list.borrow().list().unwrap().data[0].id(), "new");
}

#[tokio::test]
async fn delete_removes_entry_only_on_success() {
    let authed = client(ScriptedTransport::new().reply(404, err("NOT_FOUND")).reply(200, ok_empty()));
    let list = listed(&["a", "b"]);
    let loading = RefCell::new(false);

    let failure = delete_resource(&authed, &list, &loading, "b").await.unwrap_err();
    assert_eq!(failure.message(), "The resource you are trying to delete does not exist");
    assert_eq!(list.borrow().list().unwrap().data.len(), 2);

    delete_resource(&authed, &list, &loading, "b").await.unwrap();
    assert_eq!(list.borrow().list().unwrap().data.len(), 1);
}

#[tokio::test]
async fn retry_of_converted_video_is_explained() {
    let authed = client(ScriptedTransport::new().reply(400, err("VIDEO_CONVERTED_ALREADY")));
    let failure = retry_conversion(&authed, &RefCell::new(false), "a").await.unwrap_err();
    assert_eq!(failure.message(), "Video converted already");
}

#[tokio::test]
async fn get_resource_refreshes_listed_copy() {
    let authed = client(ScriptedTransport::new().reply(200, ok(resource_json("a", VideoState::Complete))));
    let list = listed(&["a"]);

    let fetched = get_resource(&authed, &list, &RefCell::new(false), "a").await.unwrap();

    assert_eq!(fetched.status(), VideoState::Complete);
    assert_eq!(list.borrow().list().unwrap().data[0].status(), VideoState::Complete);
}
