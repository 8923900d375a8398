// src/services/carrera_service.rs
use crate::{
    error::{AppError, AppResult},
    models::carrera::{Carrera, CarreraConCursos, CarreraPayload},
    services::carrera_curso_service,
};
use sqlx::SqlitePool;

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Carrera>> {
    tracing::debug!("Buscando todas las carreras...");
    let carreras = sqlx::query_as::<_, Carrera>(
        "SELECT id, codigo, nombre, titulo FROM carreras ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(carreras)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Carrera>> {
    tracing::debug!("Buscando carrera por ID: {}", id);
    let carrera = sqlx::query_as::<_, Carrera>(
        "SELECT id, codigo, nombre, titulo FROM carreras WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(carrera)
}

pub async fn find_by_codigo(db_pool: &SqlitePool, codigo: &str) -> AppResult<Option<Carrera>> {
    tracing::debug!("Buscando carrera por código: {}", codigo);
    let carrera = sqlx::query_as::<_, Carrera>(
        "SELECT id, codigo, nombre, titulo FROM carreras WHERE codigo = ?1",
    )
    .bind(codigo)
    .fetch_optional(db_pool)
    .await?;
    Ok(carrera)
}

pub async fn create(db_pool: &SqlitePool, payload: CarreraPayload) -> AppResult<Carrera> {
    let datos = payload.validar()?;
    tracing::info!("Creando carrera: {}", datos.codigo);

    let carrera = sqlx::query_as::<_, Carrera>(
        r#"
        INSERT INTO carreras (codigo, nombre, titulo)
        VALUES (?1, ?2, ?3)
        RETURNING id, codigo, nombre, titulo
        "#,
    )
    .bind(&datos.codigo)
    .bind(&datos.nombre)
    .bind(&datos.titulo)
    .fetch_one(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe una carrera con código {}", datos.codigo))
    })?;

    tracing::info!("✅ Carrera '{}' creada con ID {}", carrera.codigo, carrera.id);
    Ok(carrera)
}

pub async fn update(db_pool: &SqlitePool, id: i64, payload: CarreraPayload) -> AppResult<Carrera> {
    let datos = payload.validar()?;
    tracing::info!("Actualizando carrera ID: {}", id);

    sqlx::query_as::<_, Carrera>(
        r#"
        UPDATE carreras SET codigo = ?1, nombre = ?2, titulo = ?3
        WHERE id = ?4
        RETURNING id, codigo, nombre, titulo
        "#,
    )
    .bind(&datos.codigo)
    .bind(&datos.nombre)
    .bind(&datos.titulo)
    .bind(id)
    .fetch_optional(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe una carrera con código {}", datos.codigo))
    })?
    .ok_or_else(|| AppError::NotFound(format!("Carrera con ID {} no encontrada", id)))
}

/// Borra la carrera; su plan de cursos se elimina en cascada.
pub async fn delete(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Eliminando carrera ID: {}", id);
    let rows_affected = sqlx::query("DELETE FROM carreras WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| AppError::from_constraint(e, format!("La carrera {} está en uso", id)))?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("Carrera con ID {} no encontrada", id)));
    }
    Ok(())
}

/// Carrera junto a su plan de estudios ordenado.
pub async fn with_courses(db_pool: &SqlitePool, id: i64) -> AppResult<CarreraConCursos> {
    let carrera = find_by_id(db_pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Carrera con ID {} no encontrada", id)))?;
    let cursos = carrera_curso_service::courses_of_program(db_pool, carrera.id).await?;
    Ok(CarreraConCursos { carrera, cursos })
}
