// src/web/usuario_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{Usuario, UsuarioPayload},
    services::usuario_service,
    state::AppState,
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Usuario>>> {
    Ok(Json(usuario_service::find_all(&state.db_pool).await?))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Usuario>> {
    usuario_service::find_by_id(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Usuario con ID {} no encontrado", id)))
}

pub async fn get_by_cedula(
    State(state): State<AppState>,
    Path(cedula): Path<String>,
) -> AppResult<Json<Usuario>> {
    usuario_service::find_by_cedula(&state.db_pool, &cedula)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Usuario con cédula {} no encontrado", cedula)))
}

// POST /usuarios (la clave llega en texto y se guarda como hash)
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<UsuarioPayload>,
) -> AppResult<(StatusCode, Json<Usuario>)> {
    let usuario = usuario_service::create(&state.db_pool, payload, state.bcrypt_cost).await?;
    Ok((StatusCode::CREATED, Json(usuario)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UsuarioPayload>,
) -> AppResult<Json<Usuario>> {
    let usuario = usuario_service::update(&state.db_pool, id, payload, state.bcrypt_cost).await?;
    Ok(Json(usuario))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    usuario_service::delete(&state.db_pool, id).await?;
    Ok(mensaje(format!("Usuario {} eliminado", id)))
}
