//! Test doubles shared by the session unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use contract::{Address, Owner, Resource, ResourceRecord, User, VideoState};
use serde_json::{Value, json};

use crate::client::AuthedClient;
use crate::config::ClientConfig;
use crate::transport::{ApiRequest, RawResponse, Transport, TransportError};

/// Replays queued replies in order and records every request it receives.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse, TransportError>>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, status: u16, body: Value) -> Self {
        self.replies.borrow_mut().push_back(Ok(RawResponse::new(status, body.to_string())));
        self
    }

    pub(crate) fn fail(self, err: TransportError) -> Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| r.path.clone()).collect()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Send("no scripted reply left".to_owned())))
    }
}

pub(crate) fn client(transport: ScriptedTransport) -> AuthedClient<ScriptedTransport> {
    AuthedClient::new(transport, &ClientConfig::default())
}

pub(crate) fn ok(data: Value) -> Value {
    json!({"code": "SUCCESS", "data": data})
}

pub(crate) fn ok_empty() -> Value {
    json!({"code": "SUCCESS"})
}

pub(crate) fn err(code: &str) -> Value {
    json!({"code": code})
}

pub(crate) fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        fullname: "Ada Lovelace".to_owned(),
        address: Address {
            country: "UK".to_owned(),
            city: "London".to_owned(),
            street: "St James's Square".to_owned(),
        },
        version: 1,
        created_at: "2024-01-01T00:00:00.000Z".to_owned(),
        updated_at: "2024-01-01T00:00:00.000Z".to_owned(),
    }
}

pub(crate) fn user_json() -> Value {
    serde_json::to_value(sample_user()).unwrap_or(Value::Null)
}

pub(crate) fn sample_resource(id: &str, status: VideoState) -> Resource {
    Resource {
        resource: ResourceRecord {
            id: id.to_owned(),
            name: format!("{id}.mp4"),
            size: 4096,
            status,
            user: Owner::Id("u-1".to_owned()),
            created_at: "2024-01-01T00:00:00.000Z".to_owned(),
            updated_at: "2024-01-01T00:00:00.000Z".to_owned(),
        },
        video_url: Some(format!("https://cdn.example.com/{id}.mp4")),
        audio_url: None,
    }
}

pub(crate) fn resource_json(id: &str, status: VideoState) -> Value {
    serde_json::to_value(sample_resource(id, status)).unwrap_or(Value::Null)
}
