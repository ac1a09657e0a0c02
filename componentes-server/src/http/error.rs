//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Storage failures echo the driver message in a `detalle` field; that is
//! a diagnostic convenience, not a stable contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// No componente matches the id (404)
    NotFound,

    /// Database error (500, logged)
    Database {
        contexto: &'static str,
        detalle: String,
    },
}

impl ApiError {
    /// Translate a repository error, attaching the per-operation context
    /// message used in the 500 body.
    pub fn database(contexto: &'static str, err: DbError) -> Self {
        match err {
            DbError::NotFound => Self::NotFound,
            DbError::Sqlx(e) => Self::Database {
                contexto,
                detalle: e.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": e.to_string() }),
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Componente no encontrado" }),
            ),
            Self::Database { contexto, detalle } => {
                tracing::error!("{}: {}", contexto, detalle);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": contexto,
                        "detalle": detalle
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::CamposObligatorios);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Campos obligatorios: nombre y tipo");
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Componente no encontrado");
    }

    #[tokio::test]
    async fn database_error_is_500_with_detalle() {
        let err = ApiError::Database {
            contexto: "Error al listar componentes",
            detalle: "connection refused".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Error al listar componentes");
        assert_eq!(body["detalle"], "connection refused");
    }

    #[tokio::test]
    async fn repo_not_found_maps_to_404() {
        let err = ApiError::database("Error al obtener el componente", DbError::NotFound);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
