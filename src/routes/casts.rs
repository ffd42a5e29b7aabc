use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use tracing::info;

use crate::{
    AppState,
    entities::cast,
    error::{AppError, AppResult},
    extract::ValidatedJson,
    models::{CastIn, CastUpdate},
};

type CastId = WithRejection<Path<i32>, AppError>;

pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<CastIn>,
) -> AppResult<(StatusCode, Json<cast::Model>)> {
    let cast = state.casts.create(input).await?;
    info!(id = cast.id, name = %cast.name, "cast created");
    Ok((StatusCode::CREATED, Json(cast)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<cast::Model>>> {
    Ok(Json(state.casts.list().await?))
}

pub async fn fetch(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): CastId,
) -> AppResult<Json<cast::Model>> {
    Ok(Json(state.casts.get(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): CastId,
    ValidatedJson(patch): ValidatedJson<CastUpdate>,
) -> AppResult<Json<cast::Model>> {
    let cast = state.casts.update(id, patch).await?;
    info!(id, "cast updated");
    Ok(Json(cast))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): CastId,
) -> AppResult<StatusCode> {
    state.casts.delete(id).await?;
    info!(id, "cast deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// CRUD routes under `prefix`.
pub fn routes(prefix: &str) -> Router<Arc<AppState>> {
    super::crud_routes(prefix, post(create).get(list), get(fetch).put(update).delete(remove))
}
