// src/web/grupo_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::grupo::{Grupo, GrupoConDetalles, GrupoPayload},
    services::grupo_service,
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

pub async fn list(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Grupo>>> {
    Ok(Json(grupo_service::find_all(&db_pool).await?))
}

pub async fn get(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<Json<Grupo>> {
    grupo_service::find_by_id(&db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Grupo con ID {} no encontrado", id)))
}

pub async fn create(
    State(db_pool): State<SqlitePool>,
    Json(payload): Json<GrupoPayload>,
) -> AppResult<(StatusCode, Json<Grupo>)> {
    let grupo = grupo_service::create(&db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(grupo)))
}

pub async fn update(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<GrupoPayload>,
) -> AppResult<Json<Grupo>> {
    Ok(Json(grupo_service::update(&db_pool, id, payload).await?))
}

pub async fn delete(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    grupo_service::delete(&db_pool, id).await?;
    Ok(mensaje(format!("Grupo {} eliminado", id)))
}

// GET /grupos/curso/{id}
pub async fn list_by_course(
    State(db_pool): State<SqlitePool>,
    Path(curso_id): Path<i64>,
) -> AppResult<Json<Vec<Grupo>>> {
    Ok(Json(grupo_service::find_by_course_id(&db_pool, curso_id).await?))
}

// GET /grupos/profesor/{cedula}
pub async fn list_by_instructor(
    State(db_pool): State<SqlitePool>,
    Path(cedula): Path<String>,
) -> AppResult<Json<Vec<Grupo>>> {
    Ok(Json(grupo_service::find_by_instructor(&db_pool, &cedula).await?))
}

// GET /grupos/ciclo/{anio}/{numero}
pub async fn list_by_term(
    State(db_pool): State<SqlitePool>,
    Path((anio, numero)): Path<(i64, String)>,
) -> AppResult<Json<Vec<Grupo>>> {
    Ok(Json(grupo_service::find_by_term(&db_pool, anio, &numero).await?))
}

// GET /grupos/byCompositeKey/{anio}/{numeroCiclo}/{codigoCurso}/{numeroGrupo}
pub async fn get_by_composite_key(
    State(db_pool): State<SqlitePool>,
    Path((anio, numero_ciclo, codigo_curso, numero_grupo)): Path<(i64, String, String, i64)>,
) -> AppResult<Json<Grupo>> {
    grupo_service::find_by_composite_key(&db_pool, anio, &numero_ciclo, &codigo_curso, numero_grupo)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Grupo {} de {} en {}-{} no encontrado",
                numero_grupo, codigo_curso, anio, numero_ciclo
            ))
        })
}

// GET /grupos/{id}/detalle
pub async fn details(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<GrupoConDetalles>> {
    Ok(Json(grupo_service::details(&db_pool, id).await?))
}
