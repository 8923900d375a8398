// src/web/matricula_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        alumno::Alumno,
        matricula::{Matricula, MatriculaConDetalles, MatriculaPayload},
    },
    services::matricula_service,
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

pub async fn list(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Matricula>>> {
    Ok(Json(matricula_service::find_all(&db_pool).await?))
}

pub async fn get(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<Matricula>> {
    matricula_service::find_by_id(&db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Matrícula con ID {} no encontrada", id)))
}

pub async fn create(
    State(db_pool): State<SqlitePool>,
    Json(payload): Json<MatriculaPayload>,
) -> AppResult<(StatusCode, Json<Matricula>)> {
    let matricula = matricula_service::create(&db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(matricula)))
}

// PUT /matriculas/{id} (también registra la nota)
pub async fn update(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<MatriculaPayload>,
) -> AppResult<Json<Matricula>> {
    Ok(Json(matricula_service::update(&db_pool, id, payload).await?))
}

pub async fn delete(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    matricula_service::delete(&db_pool, id).await?;
    Ok(mensaje(format!("Matrícula {} eliminada", id)))
}

// GET /matriculas/alumno/{alumnoId}
pub async fn list_by_student(
    State(db_pool): State<SqlitePool>,
    Path(alumno_id): Path<i64>,
) -> AppResult<Json<Vec<MatriculaConDetalles>>> {
    Ok(Json(
        matricula_service::find_by_student_with_details(&db_pool, alumno_id).await?,
    ))
}

// GET /matriculas/grupo/{grupoId}
pub async fn list_by_group(
    State(db_pool): State<SqlitePool>,
    Path(grupo_id): Path<i64>,
) -> AppResult<Json<Vec<Matricula>>> {
    Ok(Json(matricula_service::find_by_group(&db_pool, grupo_id).await?))
}

// GET /matriculas/grupo/{grupoId}/alumnos
pub async fn students_of_group(
    State(db_pool): State<SqlitePool>,
    Path(grupo_id): Path<i64>,
) -> AppResult<Json<Vec<Alumno>>> {
    Ok(Json(
        matricula_service::find_students_by_group(&db_pool, grupo_id).await?,
    ))
}
