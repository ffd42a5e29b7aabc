//! movie-service and cast-service: a JSON CRUD API over one table each,
//! sharing schema, connection lifecycle and HTTP plumbing.

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod lifecycle;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;

use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use crate::service::ServiceKind;
use crate::{
    config::Config,
    db::ConnectionHandle,
    lifecycle::Lifecycle,
    repository::{CastRepository, MovieRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub kind: ServiceKind,
    pub config: Arc<Config>,
    pub db: ConnectionHandle,
    pub lifecycle: Lifecycle,
    pub movies: MovieRepository,
    pub casts: CastRepository,
}

impl AppState {
    pub fn new(kind: ServiceKind, config: Arc<Config>) -> Self {
        let db = ConnectionHandle::new(config.database_uri.clone(), config.db_pool_size);
        Self {
            kind,
            config,
            movies: MovieRepository::new(db.clone()),
            casts: CastRepository::new(db.clone()),
            db,
            lifecycle: Lifecycle::new(),
        }
    }
}

/// Full router for the state's service: system routes plus its entity's CRUD routes.
pub fn app(state: Arc<AppState>) -> Router {
    let kind = state.kind;
    let crud = match kind {
        ServiceKind::Movie => routes::movies::routes(kind.prefix()),
        ServiceKind::Cast => routes::casts::routes(kind.prefix()),
    };

    Router::new()
        .merge(routes::system_routes())
        .merge(crud)
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,cinema_services=debug,sqlx=warn".to_string()),
        )
        .init();
}

/// Runs one service until SIGINT/SIGTERM, then drains the database pool.
pub async fn run(kind: ServiceKind) -> anyhow::Result<()> {
    let config = Arc::new(Config::from_env()?);
    let state = Arc::new(AppState::new(kind, config.clone()));

    lifecycle::startup(&state).await;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(service = %kind, addr = %config.addr, "listening");

    axum::serve(listener, app(state.clone()))
        .with_graceful_shutdown(lifecycle::shutdown_signal())
        .await?;

    lifecycle::shutdown(&state).await;
    Ok(())
}
