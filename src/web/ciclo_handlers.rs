// src/web/ciclo_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::ciclo::{Ciclo, CicloPayload},
    services::ciclo_service,
    web::extract::{mensaje, Json, Path},
};
use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

pub async fn list(State(db_pool): State<SqlitePool>) -> AppResult<Json<Vec<Ciclo>>> {
    Ok(Json(ciclo_service::find_all(&db_pool).await?))
}

pub async fn get(State(db_pool): State<SqlitePool>, Path(id): Path<i64>) -> AppResult<Json<Ciclo>> {
    ciclo_service::find_by_id(&db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Ciclo con ID {} no encontrado", id)))
}

// GET /ciclos/activo
pub async fn get_active(State(db_pool): State<SqlitePool>) -> AppResult<Json<Ciclo>> {
    ciclo_service::find_active(&db_pool)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No hay un ciclo activo".into()))
}

// POST|PUT /ciclos/{id}/activo
pub async fn set_active(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<Ciclo>> {
    Ok(Json(ciclo_service::set_active(&db_pool, id).await?))
}

// GET /ciclos/anio/{anio}
pub async fn list_by_year(
    State(db_pool): State<SqlitePool>,
    Path(anio): Path<i64>,
) -> AppResult<Json<Vec<Ciclo>>> {
    Ok(Json(ciclo_service::find_by_year(&db_pool, anio).await?))
}

// GET /ciclos/byAnioNumero/{anio}/{numero}
pub async fn get_by_anio_numero(
    State(db_pool): State<SqlitePool>,
    Path((anio, numero)): Path<(i64, String)>,
) -> AppResult<Json<Ciclo>> {
    ciclo_service::find_by_anio_numero(&db_pool, anio, &numero)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Ciclo {}-{} no encontrado", anio, numero)))
}

pub async fn create(
    State(db_pool): State<SqlitePool>,
    Json(payload): Json<CicloPayload>,
) -> AppResult<(StatusCode, Json<Ciclo>)> {
    let ciclo = ciclo_service::create(&db_pool, payload).await?;
    Ok((StatusCode::CREATED, Json(ciclo)))
}

pub async fn update(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<CicloPayload>,
) -> AppResult<Json<Ciclo>> {
    Ok(Json(ciclo_service::update(&db_pool, id, payload).await?))
}

pub async fn delete(
    State(db_pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    ciclo_service::delete(&db_pool, id).await?;
    Ok(mensaje(format!("Ciclo {} eliminado", id)))
}
