// src/web/curso_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        carrera::Carrera,
        curso::{Curso, CursoPayload},
    },
    services::{carrera_curso_service, curso_service},
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

pub async fn list(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Curso>>> {
    Ok(Json(curso_service::find_all(&db_pool).await?))
}

pub async fn get(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<Json<Curso>> {
    curso_service::find_by_id(&db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Curso con ID {} no encontrado", id)))
}

pub async fn get_by_codigo(
    State(db_pool): State<SqlitePool>,
    Path(codigo): Path<String>,
) -> AppResult<Json<Curso>> {
    curso_service::find_by_codigo(&db_pool, &codigo)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Curso con código {} no encontrado", codigo)))
}

pub async fn create(
    State(db_pool): State<SqlitePool>,
    Json(payload): Json<CursoPayload>,
) -> AppResult<(StatusCode, Json<Curso>)> {
    let curso = curso_service::create(&db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(curso)))
}

pub async fn update(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<CursoPayload>,
) -> AppResult<Json<Curso>> {
    Ok(Json(curso_service::update(&db_pool, id, payload).await?))
}

pub async fn delete(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    curso_service::delete(&db_pool, id).await?;
    Ok(mensaje(format!("Curso {} eliminado", id)))
}

// GET /cursos/{id}/carreras
pub async fn programs(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Carrera>>> {
    Ok(Json(carrera_curso_service::programs_of_course(&db_pool, id).await?))
}
