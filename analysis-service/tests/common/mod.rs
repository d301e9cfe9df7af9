#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use analysis_service::services::providers::{ChatMessage, CompletionProvider, ProviderError};
use analysis_service::{build_router, AppState};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Records every conversation it receives and answers with a canned reply.
pub struct FakeProvider {
    reply: Result<String, u16>,
    pub calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl FakeProvider {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(ProviderError::Api {
                status: *status,
                body: "upstream exploded".to_string(),
            }),
        }
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

pub fn app(provider: Arc<FakeProvider>) -> Router {
    build_router(AppState { provider, port: 8000 })
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub fn reading(genre: &str) -> Value {
    json!({
        "user_id": "user-1",
        "book_id": "book-9",
        "book_title": "The Little Prince",
        "book_author": "Antoine de Saint-Exupéry",
        "genre": genre,
        "reading_content": "What is essential is invisible to the eye.",
    })
}
