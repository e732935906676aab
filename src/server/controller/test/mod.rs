use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::server::{data::memory::InMemoryRepository, router::router, state::AppState};


/// Builds the full application router over an empty in-memory repository.
fn app() -> (Router, InMemoryRepository) {
    let repository = InMemoryRepository::new();
    let state = AppState::with_repository(Arc::new(repository.clone()));
    (router().with_state(state), repository)
}

/// Sends one request through the router and decodes the JSON response body.
///
/// Empty bodies decode to `Value::Null`.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Creates a question through the API and returns its ID.
async fn post_question(app: &Router, text: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/questions",
        Some(serde_json::json!({ "text": text })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// Creates an answer through the API and returns the response body.
async fn post_answer(app: &Router, question_id: i64, text: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/questions/{}/answers", question_id),
        Some(serde_json::json!({ "text": text })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[tokio::test]
async fn serves_openapi_document() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/questions"].is_object());
    assert!(body["paths"]["/questions/{id}"].is_object());
    assert!(body["paths"]["/questions/{id}/answers"].is_object());
    assert!(body["paths"]["/answers/{id}"].is_object());
}
