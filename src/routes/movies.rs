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
    entities::movie,
    error::{AppError, AppResult},
    extract::ValidatedJson,
    models::{MovieIn, MovieUpdate},
};

type MovieId = WithRejection<Path<i32>, AppError>;

pub async fn create(
    State(state): State<Arc<AppState>>,
    ValidatedJson(input): ValidatedJson<MovieIn>,
) -> AppResult<(StatusCode, Json<movie::Model>)> {
    let movie = state.movies.create(input).await?;
    info!(id = movie.id, name = %movie.name, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<movie::Model>>> {
    Ok(Json(state.movies.list().await?))
}

pub async fn fetch(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): MovieId,
) -> AppResult<Json<movie::Model>> {
    Ok(Json(state.movies.get(id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): MovieId,
    ValidatedJson(patch): ValidatedJson<MovieUpdate>,
) -> AppResult<Json<movie::Model>> {
    let movie = state.movies.update(id, patch).await?;
    info!(id, "movie updated");
    Ok(Json(movie))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): MovieId,
) -> AppResult<StatusCode> {
    state.movies.delete(id).await?;
    info!(id, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// CRUD routes under `prefix`.
pub fn routes(prefix: &str) -> Router<Arc<AppState>> {
    super::crud_routes(prefix, post(create).get(list), get(fetch).put(update).delete(remove))
}
