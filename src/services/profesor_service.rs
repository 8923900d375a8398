// src/services/profesor_service.rs
use crate::{
    error::{AppError, AppResult},
    models::profesor::{Profesor, ProfesorPayload},
};
use sqlx::SqlitePool;

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Profesor>> {
    tracing::debug!("Buscando todos los profesores...");
    let profesores = sqlx::query_as::<_, Profesor>(
        "SELECT id, cedula, nombre, telefono, email FROM profesores ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(profesores)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Profesor>> {
    tracing::debug!("Buscando profesor por ID: {}", id);
    let profesor = sqlx::query_as::<_, Profesor>(
        "SELECT id, cedula, nombre, telefono, email FROM profesores WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(profesor)
}

pub async fn find_by_cedula(db_pool: &SqlitePool, cedula: &str) -> AppResult<Option<Profesor>> {
    tracing::debug!("Buscando profesor por cédula: {}", cedula);
    let profesor = sqlx::query_as::<_, Profesor>(
        "SELECT id, cedula, nombre, telefono, email FROM profesores WHERE cedula = ?1",
    )
    .bind(cedula)
    .fetch_optional(db_pool)
    .await?;
    Ok(profesor)
}

pub async fn create(db_pool: &SqlitePool, payload: ProfesorPayload) -> AppResult<Profesor> {
    let datos = payload.validar()?;
    tracing::info!("Creando profesor con cédula: {}", datos.cedula);

    let profesor = sqlx::query_as::<_, Profesor>(
        r#"
        INSERT INTO profesores (cedula, nombre, telefono, email)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, cedula, nombre, telefono, email
        "#,
    )
    .bind(&datos.cedula)
    .bind(&datos.nombre)
    .bind(&datos.telefono)
    .bind(&datos.email)
    .fetch_one(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe un profesor con cédula {}", datos.cedula))
    })?;

    tracing::info!("✅ Profesor '{}' creado con ID {}", profesor.cedula, profesor.id);
    Ok(profesor)
}

pub async fn update(
    db_pool: &SqlitePool,
    id: i64,
    payload: ProfesorPayload,
) -> AppResult<Profesor> {
    let datos = payload.validar()?;
    tracing::info!("Actualizando profesor ID: {}", id);

    sqlx::query_as::<_, Profesor>(
        r#"
        UPDATE profesores SET cedula = ?1, nombre = ?2, telefono = ?3, email = ?4
        WHERE id = ?5
        RETURNING id, cedula, nombre, telefono, email
        "#,
    )
    .bind(&datos.cedula)
    .bind(&datos.nombre)
    .bind(&datos.telefono)
    .bind(&datos.email)
    .bind(id)
    .fetch_optional(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe un profesor con cédula {}", datos.cedula))
    })?
    .ok_or_else(|| AppError::NotFound(format!("Profesor con ID {} no encontrado", id)))
}

/// Los grupos que impartía quedan sin profesor asignado.
pub async fn delete(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Eliminando profesor ID: {}", id);
    let rows_affected = sqlx::query("DELETE FROM profesores WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("Profesor con ID {} no encontrado", id)));
    }
    Ok(())
}
