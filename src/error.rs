use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

use crate::service::ServiceKind;

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The database is unreachable, or was never connected.
    #[error("database unavailable: {0}")]
    Connection(String),

    #[error("{} not found", .0.entity())]
    NotFound(ServiceKind),

    #[error("{0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(DbErr),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Connection(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand to clients. Storage internals stay in the logs.
    fn public_detail(&self) -> String {
        match self {
            AppError::Connection(_) => "database unavailable".to_string(),
            AppError::Storage(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Connection(err.to_string()),
            other => Self::Storage(other),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Connection(reason) => tracing::warn!(%reason, "request hit unavailable database"),
            AppError::Storage(err) => tracing::error!(error = %err, "storage error"),
            _ => {},
        }
        let status = self.status_code();
        (status, Json(ErrorResponse { detail: self.public_detail() })).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use sea_orm::RuntimeErr;

    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(AppError::NotFound(ServiceKind::Movie).to_string(), "Movie not found");
        assert_eq!(AppError::NotFound(ServiceKind::Cast).to_string(), "Cast not found");
    }

    #[test]
    fn connection_failures_are_classified_apart_from_storage() {
        let conn = AppError::from(DbErr::Conn(RuntimeErr::Internal("refused".into())));
        assert!(matches!(conn, AppError::Connection(_)));
        assert_eq!(conn.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let query = AppError::from(DbErr::Query(RuntimeErr::Internal("no such table".into())));
        assert!(matches!(query, AppError::Storage(_)));
        assert_eq!(query.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn storage_detail_is_not_leaked() {
        let err = AppError::from(DbErr::Custom("secret table layout".into()));
        assert_eq!(err.public_detail(), "internal server error");
    }
}
