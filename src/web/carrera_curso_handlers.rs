// src/web/carrera_curso_handlers.rs
use crate::{
    error::AppResult,
    models::carrera_curso::{CarreraCurso, CarreraCursoPayload, ReordenPayload},
    services::carrera_curso_service,
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

// GET /carreras-cursos
pub async fn list(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<CarreraCurso>>> {
    Ok(Json(carrera_curso_service::find_all(&db_pool).await?))
}

// GET /carreras-cursos/carrera/{codigo}
pub async fn list_by_program(
    State(db_pool): State<SqlitePool>,
    Path(codigo): Path<String>,
) -> AppResult<Json<Vec<CarreraCurso>>> {
    Ok(Json(
        carrera_curso_service::find_by_program_code(&db_pool, &codigo).await?,
    ))
}

// POST /carreras-cursos
pub async fn add(
    State(db_pool): State<SqlitePool>,
    Json(payload): Json<CarreraCursoPayload>,
) -> AppResult<(StatusCode, Json<CarreraCurso>)> {
    let asociacion = carrera_curso_service::add_course_to_program(&db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(asociacion)))
}

// PUT /carreras-cursos/{id}
pub async fn reorder(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<ReordenPayload>,
) -> AppResult<Json<CarreraCurso>> {
    Ok(Json(
        carrera_curso_service::reorder(&db_pool, id, payload.orden).await?,
    ))
}

// DELETE /carreras-cursos/{id}
pub async fn remove(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    carrera_curso_service::remove_course_from_program(&db_pool, id).await?;
    Ok(mensaje(format!("Asociación {} eliminada", id)))
}
