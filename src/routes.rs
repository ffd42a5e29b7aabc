pub mod casts;
pub mod movies;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use serde::Serialize;

use crate::{AppState, lifecycle::Phase};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    message: String,
    docs: String,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    status: &'static str,
    service: &'static str,
    phase: Phase,
    database: &'static str,
    checked_at: jiff::Timestamp,
}

/// Liveness only; stays healthy while the database is down.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", service: state.kind.name() })
}

pub async fn index(State(state): State<Arc<AppState>>) -> Json<ServiceDescriptor> {
    Json(ServiceDescriptor {
        message: format!("{} API", state.kind.title()),
        docs: state.kind.docs_path(),
    })
}

pub async fn ready(State(state): State<Arc<AppState>>) -> Response {
    let phase = state.lifecycle.phase();
    let database = match state.db.ping().await {
        Ok(()) => "connected",
        Err(err) => {
            tracing::debug!(error = %err, "readiness ping failed");
            "unavailable"
        },
    };

    let is_ready = phase == Phase::Running && database == "connected";
    let status = if is_ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };

    let body = ReadinessResponse {
        status: if is_ready { "ready" } else { "unavailable" },
        service: state.kind.name(),
        phase,
        database,
        checked_at: jiff::Timestamp::now(),
    };
    (status, Json(body)).into_response()
}

pub fn system_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
}

/// Mounts a collection and an item router under `prefix`, each reachable with
/// or without a trailing slash.
fn crud_routes(
    prefix: &str,
    collection: MethodRouter<Arc<AppState>>,
    item: MethodRouter<Arc<AppState>>,
) -> Router<Arc<AppState>> {
    Router::new()
        .route(prefix, collection.clone())
        .route(&format!("{prefix}/"), collection)
        .route(&format!("{prefix}/{{id}}"), item.clone())
        .route(&format!("{prefix}/{{id}}/"), item)
}
