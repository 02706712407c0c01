use super::*;
use crate::config::DEFAULT_REFRESH_PATH;
use crate::testing::{ScriptedTransport, client, err, ok, ok_empty};
use crate::transport::TransportError;

const PROFILE: &str = "/api/users/profile";

// =============================================================
// Pass-through
// =============================================================

#[tokio::test]
async fn success_reply_is_returned_without_refresh() {
    let authed = client(ScriptedTransport::new().reply(200, ok(serde_json::json!({"id": "u-1"}))));
    let response = authed.send(ApiRequest::get(PROFILE)).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(authed.transport().paths(), vec![PROFILE]);
}

#[tokio::test]
async fn non_expiry_error_propagates_without_refresh() {
    let authed = client(ScriptedTransport::new().reply(400, err("VALIDATION_REQUEST_ERROR")));
    let result = authed.send(ApiRequest::get(PROFILE)).await;
    assert!(matches!(
        result,
        Err(ApiError::Rejected { status: 400, code: Some(ErrorCode::ValidationRequestError) })
    ));
    assert_eq!(authed.transport().paths(), vec![PROFILE]);
}

#[tokio::test]
async fn transport_failure_bypasses_refresh() {
    let authed = client(
        ScriptedTransport::new()
            .fail(TransportError::Send("offline".to_owned()))
            .reply(200, ok_empty()),
    );
    let result = authed.send(ApiRequest::get(PROFILE)).await;
    assert!(matches!(result, Err(ApiError::Transport(TransportError::Send(_)))));
    assert_eq!(authed.transport().paths(), vec![PROFILE]);
    assert_eq!(authed.transport().remaining(), 1);
}

#[tokio::test]
async fn ok_status_with_error_code_is_a_failure() {
    let authed = client(ScriptedTransport::new().reply(200, err("NOT_FOUND")));
    let result = authed.send(ApiRequest::get("/api/resources/r-1")).await;
    assert!(matches!(result, Err(ApiError::Rejected { status: 200, code: Some(ErrorCode::NotFound) })));
}

#[tokio::test]
async fn error_status_without_envelope_has_no_code() {
    let authed = client(ScriptedTransport::new().reply(502, serde_json::json!("Bad Gateway")));
    let result = authed.send(ApiRequest::get(PROFILE)).await;
    assert!(matches!(result, Err(ApiError::Rejected { status: 502, code: None })));
    assert_eq!(authed.transport().paths(), vec![PROFILE]);
}

// =============================================================
// Refresh and replay
// =============================================================

#[tokio::test]
async fn expired_token_refreshes_and_returns_replayed_result() {
    let authed = client(
        ScriptedTransport::new()
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .reply(200, ok_empty())
            .reply(200, ok(serde_json::json!({"id": "u-1"}))),
    );
    let request = ApiRequest::post("/api/resources/retry/r-1");
    let response = authed.send(request.clone()).await.unwrap();

    assert_eq!(response.status, 200);
    let sent = authed.transport().sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[1].path, DEFAULT_REFRESH_PATH);
    assert_eq!(sent[1].method, crate::transport::Method::Post);
    assert_eq!(sent[2], request, "replay must reuse the original parameters");
}

#[tokio::test]
async fn replayed_request_is_not_refreshed_twice() {
    let authed = client(
        ScriptedTransport::new()
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .reply(200, ok_empty())
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .reply(200, ok_empty()),
    );
    let result = authed.send(ApiRequest::get(PROFILE)).await;

    assert!(matches!(
        result,
        Err(ApiError::Rejected { status: 401, code: Some(ErrorCode::AccessTokenExpired) })
    ));
    assert_eq!(authed.transport().paths(), vec![PROFILE, DEFAULT_REFRESH_PATH, PROFILE]);
    assert_eq!(authed.transport().remaining(), 1);
}

#[tokio::test]
async fn failed_refresh_propagates_original_failure() {
    let authed = client(
        ScriptedTransport::new()
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .reply(401, err("UNEXPECTED_ERROR")),
    );
    let result = authed.send(ApiRequest::get(PROFILE)).await;

    assert!(matches!(
        result,
        Err(ApiError::Rejected { status: 401, code: Some(ErrorCode::AccessTokenExpired) })
    ));
    assert_eq!(authed.transport().paths(), vec![PROFILE, DEFAULT_REFRESH_PATH]);
}

#[tokio::test]
async fn refresh_transport_failure_propagates_original_failure() {
    let authed = client(
        ScriptedTransport::new()
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .fail(TransportError::Send("offline".to_owned())),
    );
    let result = authed.send(ApiRequest::get(PROFILE)).await;
    assert!(matches!(result, Err(ApiError::Rejected { code: Some(ErrorCode::AccessTokenExpired), .. })));
}

#[tokio::test]
async fn replay_failure_other_than_expiry_reaches_caller() {
    let authed = client(
        ScriptedTransport::new()
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .reply(200, ok_empty())
            .reply(404, err("NOT_FOUND")),
    );
    let result = authed.send(ApiRequest::get("/api/resources/r-9")).await;
    assert!(matches!(result, Err(ApiError::Rejected { status: 404, code: Some(ErrorCode::NotFound) })));
}

#[tokio::test]
async fn each_request_carries_its_own_retry_flag() {
    let authed = client(
        ScriptedTransport::new()
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .reply(200, ok_empty())
            .reply(200, ok_empty())
            .reply(401, err("ACCESS_TOKEN_EXPIRED"))
            .reply(200, ok_empty())
            .reply(200, ok_empty()),
    );
    authed.send(ApiRequest::get(PROFILE)).await.unwrap();
    authed.send(ApiRequest::get("/api/resources?itemsPerPage=10&page=1")).await.unwrap();

    let refreshes = authed
        .transport()
        .paths()
        .iter()
        .filter(|p| p.as_str() == DEFAULT_REFRESH_PATH)
        .count();
    assert_eq!(refreshes, 2);
}

#[tokio::test]
async fn refresh_requires_success_code() {
    let authed = client(ScriptedTransport::new().reply(200, serde_json::json!({"ok": true})));
    assert!(!authed.refresh().await);

    let authed = client(ScriptedTransport::new().reply(200, ok_empty()));
    assert!(authed.refresh().await);
}
