// src/web/carrera_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        carrera::{Carrera, CarreraConCursos, CarreraPayload, CursoConOrden},
        carrera_curso::CarreraCurso,
    },
    services::{carrera_curso_service, carrera_service},
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

pub async fn list(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Carrera>>> {
    Ok(Json(carrera_service::find_all(&db_pool).await?))
}

pub async fn get(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<Carrera>> {
    carrera_service::find_by_id(&db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Carrera con ID {} no encontrada", id)))
}

pub async fn get_by_codigo(
    State(db_pool): State<SqlitePool>,
    Path(codigo): Path<String>,
) -> AppResult<Json<Carrera>> {
    carrera_service::find_by_codigo(&db_pool, &codigo)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Carrera con código {} no encontrada", codigo)))
}

pub async fn create(
    State(db_pool): State<SqlitePool>,
    Json(payload): Json<CarreraPayload>,
) -> AppResult<(StatusCode, Json<Carrera>)> {
    let carrera = carrera_service::create(&db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(carrera)))
}

pub async fn update(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<CarreraPayload>,
) -> AppResult<Json<Carrera>> {
    Ok(Json(carrera_service::update(&db_pool, id, payload).await?))
}

pub async fn delete(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    carrera_service::delete(&db_pool, id).await?;
    Ok(mensaje(format!("Carrera {} eliminada", id)))
}

// GET /carreras/{id}/cursos
pub async fn courses(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<CursoConOrden>>> {
    Ok(Json(carrera_curso_service::courses_of_program(&db_pool, id).await?))
}

// GET /carreras/{id}/detalle
pub async fn details(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<CarreraConCursos>> {
    Ok(Json(carrera_service::with_courses(&db_pool, id).await?))
}

// POST /carreras/{id}/cursos/{cursoId}
pub async fn append_course(
    State(db_pool): State<SqlitePool>,
    Path((id, curso_id)): Path<(i64, i64)>,
) -> AppResult<(StatusCode, Json<CarreraCurso>)> {
    let asociacion = carrera_curso_service::append_course(&db_pool, id, curso_id).await?;
    Ok((StatusCode::CREATED, Json(asociacion)))
}

// DELETE /carreras/{id}/cursos/{cursoId}
pub async fn remove_course(
    State(db_pool): State<SqlitePool>,
    Path((id, curso_id)): Path<(i64, i64)>,
) -> AppResult<Json<serde_json::Value>> {
    carrera_curso_service::remove_pair(&db_pool, id, curso_id).await?;
    Ok(mensaje(format!("Curso {} retirado de la carrera {}", curso_id, id)))
}
