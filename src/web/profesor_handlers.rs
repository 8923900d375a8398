// src/web/profesor_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::profesor::{Profesor, ProfesorPayload},
    services::profesor_service,
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

pub async fn list(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Profesor>>> {
    Ok(Json(profesor_service::find_all(&db_pool).await?))
}

pub async fn get(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<Profesor>> {
    profesor_service::find_by_id(&db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Profesor con ID {} no encontrado", id)))
}

pub async fn get_by_cedula(
    State(db_pool): State<SqlitePool>,
    Path(cedula): Path<String>,
) -> AppResult<Json<Profesor>> {
    profesor_service::find_by_cedula(&db_pool, &cedula)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!("Profesor con cédula {} no encontrado", cedula))
        })
}

pub async fn create(
    State(db_pool): State<SqlitePool>,
    Json(payload): Json<ProfesorPayload>,
) -> AppResult<(StatusCode, Json<Profesor>)> {
    let profesor = profesor_service::create(&db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(profesor)))
}

pub async fn update(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<ProfesorPayload>,
) -> AppResult<Json<Profesor>> {
    Ok(Json(profesor_service::update(&db_pool, id, payload).await?))
}

pub async fn delete(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    profesor_service::delete(&db_pool, id).await?;
    Ok(mensaje(format!("Profesor {} eliminado", id)))
}
