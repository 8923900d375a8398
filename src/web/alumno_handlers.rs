// src/web/alumno_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        alumno::{Alumno, AlumnoPayload},
        matricula::ResumenAcademico,
    },
    services::{alumno_service, matricula_service},
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

// GET /alumnos
pub async fn list(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Alumno>>> {
    Ok(Json(alumno_service::find_all(&db_pool).await?))
}

// GET /alumnos/{id}
pub async fn get(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<Alumno>> {
    alumno_service::find_by_id(&db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Alumno con ID {} no encontrado", id)))
}

// GET /alumnos/cedula/{cedula}
pub async fn get_by_cedula(
    State(db_pool): State<SqlitePool>,
    Path(cedula): Path<String>,
) -> AppResult<Json<Alumno>> {
    alumno_service::find_by_cedula(&db_pool, &cedula)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Alumno con cédula {} no encontrado", cedula)))
}

// POST /alumnos
pub async fn create(
    State(db_pool): State<SqlitePool>,
    Json(payload): Json<AlumnoPayload>,
) -> AppResult<(StatusCode, Json<Alumno>)> {
    let alumno = alumno_service::create(&db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(alumno)))
}

// PUT /alumnos/{id}
pub async fn update(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<AlumnoPayload>,
) -> AppResult<Json<Alumno>> {
    Ok(Json(alumno_service::update(&db_pool, id, payload).await?))
}

// DELETE /alumnos/{id}
pub async fn delete(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    alumno_service::delete(&db_pool, id).await?;
    Ok(mensaje(format!("Alumno {} eliminado", id)))
}

// GET /alumnos/{id}/resumen
pub async fn summary(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<ResumenAcademico>> {
    Ok(Json(matricula_service::academic_summary(&db_pool, id).await?))
}
