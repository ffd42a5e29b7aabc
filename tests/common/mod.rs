#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use cinema_services::{AppState, ServiceKind, config::Config, lifecycle};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// A sqlite path whose directory does not exist, so connecting always fails.
pub const UNREACHABLE_DATABASE_URI: &str = "sqlite:///nonexistent-cinema-dir/nested/cinema.db";

/// Started state backed by its own in-memory database.
pub async fn started_state(kind: ServiceKind) -> Arc<AppState> {
    let state = Arc::new(AppState::new(kind, Arc::new(Config::in_memory())));
    lifecycle::startup(&state).await;
    state
}

/// Started state whose database connection failed at startup.
pub async fn degraded_state(kind: ServiceKind) -> Arc<AppState> {
    let config = Config {
        database_uri: UNREACHABLE_DATABASE_URI.to_string(),
        ..Config::in_memory()
    };
    let state = Arc::new(AppState::new(kind, Arc::new(config)));
    lifecycle::startup(&state).await;
    state
}

pub fn app(state: &Arc<AppState>) -> Router {
    cinema_services::app(state.clone())
}

/// Sends one request and returns the status plus the JSON body
/// (`Value::Null` for an empty body).
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}
