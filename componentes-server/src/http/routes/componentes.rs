//! Componente endpoints
//!
//! Five routes over one resource. Validation runs before any storage
//! call; storage failures surface as 500 with the per-operation context
//! message.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::ComponenteRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Componente, ComponentePayload};

/// GET /componentes - list all componentes ordered by id
async fn list_componentes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Componente>>, ApiError> {
    let componentes = ComponenteRepo::new(&state.pool)
        .list()
        .await
        .map_err(|e| ApiError::database("Error al listar componentes", e))?;

    Ok(Json(componentes))
}

/// GET /componentes/{id} - get a single componente
async fn get_componente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Componente>, ApiError> {
    let componente = ComponenteRepo::new(&state.pool)
        .get(id)
        .await
        .map_err(|e| ApiError::database("Error al obtener el componente", e))?;

    Ok(Json(componente))
}

/// POST /componentes - create a new componente
async fn create_componente(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ComponentePayload>,
) -> Result<(StatusCode, Json<Componente>), ApiError> {
    let nuevo = payload.into_nuevo()?;

    let componente = ComponenteRepo::new(&state.pool)
        .create(nuevo)
        .await
        .map_err(|e| ApiError::database("Error al crear un componente nuevo", e))?;

    Ok((StatusCode::CREATED, Json(componente)))
}

/// PUT /componentes/{id} - partial update merging against stored values
async fn update_componente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(payload): Json<ComponentePayload>,
) -> Result<Json<Componente>, ApiError> {
    let cambios = payload.into_cambios()?;

    let componente = ComponenteRepo::new(&state.pool)
        .update(id, cambios)
        .await
        .map_err(|e| ApiError::database("Error al actualizar el componente", e))?;

    Ok(Json(componente))
}

/// DELETE /componentes/{id} - delete and answer with an empty 204
async fn delete_componente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    ComponenteRepo::new(&state.pool)
        .delete(id)
        .await
        .map_err(|e| ApiError::database("Error al eliminar el componente", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Componente routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/componentes", get(list_componentes).post(create_componente))
        .route(
            "/componentes/{id}",
            get(get_componente)
                .put(update_componente)
                .delete(delete_componente),
        )
}
