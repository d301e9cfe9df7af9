#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mock_analysis_service::config::Config;
use mock_analysis_service::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

pub const SIMULATED_TIMEOUT: Duration = Duration::from_secs(3);

pub fn app() -> Router {
    let config = Config {
        port: 0,
        simulated_timeout: SIMULATED_TIMEOUT,
    };
    build_router(AppState::new(config))
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
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send(app, Method::POST, uri, body).await
}

pub async fn simulate(app: &Router, error_type: &str) -> StatusCode {
    let uri = format!("/api/v1/admin/simulate-error?error_type={}", error_type);
    post(app, &uri, None).await.0
}

pub fn reading(genre: &str, content: &str) -> Value {
    json!({
        "user_id": "user-42",
        "book_id": "book-7",
        "book_title": "Demian",
        "book_author": "Hermann Hesse",
        "genre": genre,
        "reading_content": content,
    })
}
