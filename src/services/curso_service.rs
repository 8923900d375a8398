// src/services/curso_service.rs
use crate::{
    error::{AppError, AppResult},
    models::curso::{Curso, CursoPayload},
};
use sqlx::SqlitePool;

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Curso>> {
    tracing::debug!("Buscando todos los cursos...");
    let cursos = sqlx::query_as::<_, Curso>(
        "SELECT id, codigo, nombre, creditos, horas_semanales FROM cursos ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(cursos)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Curso>> {
    tracing::debug!("Buscando curso por ID: {}", id);
    let curso = sqlx::query_as::<_, Curso>(
        "SELECT id, codigo, nombre, creditos, horas_semanales FROM cursos WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(curso)
}

pub async fn find_by_codigo(db_pool: &SqlitePool, codigo: &str) -> AppResult<Option<Curso>> {
    tracing::debug!("Buscando curso por código: {}", codigo);
    let curso = sqlx::query_as::<_, Curso>(
        "SELECT id, codigo, nombre, creditos, horas_semanales FROM cursos WHERE codigo = ?1",
    )
    .bind(codigo)
    .fetch_optional(db_pool)
    .await?;
    Ok(curso)
}

pub async fn create(db_pool: &SqlitePool, payload: CursoPayload) -> AppResult<Curso> {
    let datos = payload.validar()?;
    tracing::info!("Creando curso: {}", datos.codigo);

    let curso = sqlx::query_as::<_, Curso>(
        r#"
        INSERT INTO cursos (codigo, nombre, creditos, horas_semanales)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, codigo, nombre, creditos, horas_semanales
        "#,
    )
    .bind(&datos.codigo)
    .bind(&datos.nombre)
    .bind(datos.creditos)
    .bind(datos.horas_semanales)
    .fetch_one(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe un curso con código {}", datos.codigo))
    })?;

    tracing::info!("✅ Curso '{}' creado con ID {}", curso.codigo, curso.id);
    Ok(curso)
}

/// Un cambio de código se propaga a los grupos del curso.
pub async fn update(db_pool: &SqlitePool, id: i64, payload: CursoPayload) -> AppResult<Curso> {
    let datos = payload.validar()?;
    tracing::info!("Actualizando curso ID: {}", id);

    sqlx::query_as::<_, Curso>(
        r#"
        UPDATE cursos SET codigo = ?1, nombre = ?2, creditos = ?3, horas_semanales = ?4
        WHERE id = ?5
        RETURNING id, codigo, nombre, creditos, horas_semanales
        "#,
    )
    .bind(&datos.codigo)
    .bind(&datos.nombre)
    .bind(datos.creditos)
    .bind(datos.horas_semanales)
    .bind(id)
    .fetch_optional(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe un curso con código {}", datos.codigo))
    })?
    .ok_or_else(|| AppError::NotFound(format!("Curso con ID {} no encontrado", id)))
}

/// Falla con conflicto si algún grupo o plan de carrera usa el curso.
pub async fn delete(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Eliminando curso ID: {}", id);
    let rows_affected = sqlx::query("DELETE FROM cursos WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(
                e,
                format!("El curso {} tiene grupos o carreras asociadas", id),
            )
        })?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("Curso con ID {} no encontrado", id)));
    }
    Ok(())
}
