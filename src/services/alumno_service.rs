// src/services/alumno_service.rs
use crate::{
    error::{AppError, AppResult},
    models::alumno::{Alumno, AlumnoPayload},
};
use sqlx::SqlitePool;

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Alumno>> {
    tracing::debug!("Buscando todos los alumnos...");
    let alumnos = sqlx::query_as::<_, Alumno>(
        r#"
        SELECT id, cedula, nombre, telefono, email, fecha_nacimiento, codigo_carrera
        FROM alumnos
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} alumnos.", alumnos.len());
    Ok(alumnos)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Alumno>> {
    tracing::debug!("Buscando alumno por ID: {}", id);
    let alumno = sqlx::query_as::<_, Alumno>(
        r#"
        SELECT id, cedula, nombre, telefono, email, fecha_nacimiento, codigo_carrera
        FROM alumnos
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(alumno)
}

pub async fn find_by_cedula(db_pool: &SqlitePool, cedula: &str) -> AppResult<Option<Alumno>> {
    tracing::debug!("Buscando alumno por cédula: {}", cedula);
    let alumno = sqlx::query_as::<_, Alumno>(
        r#"
        SELECT id, cedula, nombre, telefono, email, fecha_nacimiento, codigo_carrera
        FROM alumnos
        WHERE cedula = ?1
        "#,
    )
    .bind(cedula)
    .fetch_optional(db_pool)
    .await?;
    Ok(alumno)
}

pub async fn create(db_pool: &SqlitePool, payload: AlumnoPayload) -> AppResult<Alumno> {
    let datos = payload.validar()?;
    tracing::info!("Creando alumno con cédula: {}", datos.cedula);

    let alumno = sqlx::query_as::<_, Alumno>(
        r#"
        INSERT INTO alumnos (cedula, nombre, telefono, email, fecha_nacimiento, codigo_carrera)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, cedula, nombre, telefono, email, fecha_nacimiento, codigo_carrera
        "#,
    )
    .bind(&datos.cedula)
    .bind(&datos.nombre)
    .bind(&datos.telefono)
    .bind(&datos.email)
    .bind(&datos.fecha_nacimiento)
    .bind(&datos.codigo_carrera)
    .fetch_one(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe un alumno con cédula {}", datos.cedula))
    })?;

    tracing::info!("✅ Alumno '{}' creado con ID {}", alumno.cedula, alumno.id);
    Ok(alumno)
}

pub async fn update(db_pool: &SqlitePool, id: i64, payload: AlumnoPayload) -> AppResult<Alumno> {
    let datos = payload.validar()?;
    tracing::info!("Actualizando alumno ID: {}", id);

    let alumno = sqlx::query_as::<_, Alumno>(
        r#"
        UPDATE alumnos
        SET cedula = ?1, nombre = ?2, telefono = ?3, email = ?4,
            fecha_nacimiento = ?5, codigo_carrera = ?6
        WHERE id = ?7
        RETURNING id, cedula, nombre, telefono, email, fecha_nacimiento, codigo_carrera
        "#,
    )
    .bind(&datos.cedula)
    .bind(&datos.nombre)
    .bind(&datos.telefono)
    .bind(&datos.email)
    .bind(&datos.fecha_nacimiento)
    .bind(&datos.codigo_carrera)
    .bind(id)
    .fetch_optional(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe un alumno con cédula {}", datos.cedula))
    })?
    .ok_or_else(|| AppError::NotFound(format!("Alumno con ID {} no encontrado", id)))?;

    tracing::info!("✅ Alumno {} actualizado.", id);
    Ok(alumno)
}

pub async fn delete(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Eliminando alumno ID: {}", id);
    let rows_affected = sqlx::query("DELETE FROM alumnos WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(e, format!("El alumno {} tiene matrículas registradas", id))
        })?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("Alumno con ID {} no encontrado", id)));
    }
    tracing::info!("✅ Alumno {} eliminado.", id);
    Ok(())
}
