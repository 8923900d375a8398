// src/services/grupo_service.rs
use crate::{
    error::{AppError, AppResult},
    models::grupo::{Grupo, GrupoConDetalles, GrupoPayload},
    services::{ciclo_service, curso_service, matricula_service, profesor_service},
};
use sqlx::SqlitePool;

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Grupo>> {
    tracing::debug!("Buscando todos los grupos...");
    let grupos = sqlx::query_as::<_, Grupo>(
        r#"
        SELECT id, anio, numero_ciclo, codigo_curso, numero_grupo, horario, cedula_profesor
        FROM grupos
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(grupos)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Grupo>> {
    tracing::debug!("Buscando grupo por ID: {}", id);
    let grupo = sqlx::query_as::<_, Grupo>(
        r#"
        SELECT id, anio, numero_ciclo, codigo_curso, numero_grupo, horario, cedula_profesor
        FROM grupos
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(grupo)
}

pub async fn find_by_composite_key(
    db_pool: &SqlitePool,
    anio: i64,
    numero_ciclo: &str,
    codigo_curso: &str,
    numero_grupo: i64,
) -> AppResult<Option<Grupo>> {
    tracing::debug!(
        "Buscando grupo {}-{} {} #{}",
        anio,
        numero_ciclo,
        codigo_curso,
        numero_grupo
    );
    let grupo = sqlx::query_as::<_, Grupo>(
        r#"
        SELECT id, anio, numero_ciclo, codigo_curso, numero_grupo, horario, cedula_profesor
        FROM grupos
        WHERE anio = ?1 AND numero_ciclo = ?2 AND codigo_curso = ?3 AND numero_grupo = ?4
        "#,
    )
    .bind(anio)
    .bind(numero_ciclo)
    .bind(codigo_curso)
    .bind(numero_grupo)
    .fetch_optional(db_pool)
    .await?;
    Ok(grupo)
}

/// Grupos de un curso dado su ID. Un curso inexistente produce una lista
/// vacía en lugar de un error.
pub async fn find_by_course_id(db_pool: &SqlitePool, curso_id: i64) -> AppResult<Vec<Grupo>> {
    tracing::debug!("Buscando grupos del curso ID: {}", curso_id);
    let grupos = sqlx::query_as::<_, Grupo>(
        r#"
        SELECT g.id, g.anio, g.numero_ciclo, g.codigo_curso, g.numero_grupo,
               g.horario, g.cedula_profesor
        FROM grupos g
        JOIN cursos c ON c.codigo = g.codigo_curso
        WHERE c.id = ?1
        ORDER BY g.id ASC
        "#,
    )
    .bind(curso_id)
    .fetch_all(db_pool)
    .await?;
    Ok(grupos)
}

pub async fn find_by_instructor(db_pool: &SqlitePool, cedula: &str) -> AppResult<Vec<Grupo>> {
    tracing::debug!("Buscando grupos del profesor: {}", cedula);
    let grupos = sqlx::query_as::<_, Grupo>(
        r#"
        SELECT id, anio, numero_ciclo, codigo_curso, numero_grupo, horario, cedula_profesor
        FROM grupos
        WHERE cedula_profesor = ?1
        ORDER BY id ASC
        "#,
    )
    .bind(cedula)
    .fetch_all(db_pool)
    .await?;
    Ok(grupos)
}

pub async fn find_by_term(
    db_pool: &SqlitePool,
    anio: i64,
    numero_ciclo: &str,
) -> AppResult<Vec<Grupo>> {
    tracing::debug!("Buscando grupos del ciclo {}-{}", anio, numero_ciclo);
    let grupos = sqlx::query_as::<_, Grupo>(
        r#"
        SELECT id, anio, numero_ciclo, codigo_curso, numero_grupo, horario, cedula_profesor
        FROM grupos
        WHERE anio = ?1 AND numero_ciclo = ?2
        ORDER BY id ASC
        "#,
    )
    .bind(anio)
    .bind(numero_ciclo)
    .fetch_all(db_pool)
    .await?;
    Ok(grupos)
}

// Las referencias de un grupo deben existir antes de guardarlo
async fn validate_references(db_pool: &SqlitePool, datos: &GrupoPayload) -> AppResult {
    if ciclo_service::find_by_anio_numero(db_pool, datos.anio, &datos.numero_ciclo)
        .await?
        .is_none()
    {
        return Err(AppError::Validation(format!(
            "El ciclo {}-{} no existe",
            datos.anio, datos.numero_ciclo
        )));
    }
    if curso_service::find_by_codigo(db_pool, &datos.codigo_curso)
        .await?
        .is_none()
    {
        return Err(AppError::Validation(format!(
            "El curso {} no existe",
            datos.codigo_curso
        )));
    }
    if let Some(cedula) = datos.cedula_profesor.as_deref() {
        if profesor_service::find_by_cedula(db_pool, cedula).await?.is_none() {
            return Err(AppError::Validation(format!(
                "El profesor con cédula {} no existe",
                cedula
            )));
        }
    }
    Ok(())
}

fn duplicate_message(datos: &GrupoPayload) -> String {
    format!(
        "Ya existe el grupo {} del curso {} en el ciclo {}-{}",
        datos.numero_grupo, datos.codigo_curso, datos.anio, datos.numero_ciclo
    )
}

pub async fn create(db_pool: &SqlitePool, payload: GrupoPayload) -> AppResult<Grupo> {
    let datos = payload.validar()?;
    tracing::info!(
        "Creando grupo {} de {} ({}-{})",
        datos.numero_grupo,
        datos.codigo_curso,
        datos.anio,
        datos.numero_ciclo
    );
    validate_references(db_pool, &datos).await?;

    let grupo = sqlx::query_as::<_, Grupo>(
        r#"
        INSERT INTO grupos (anio, numero_ciclo, codigo_curso, numero_grupo, horario, cedula_profesor)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, anio, numero_ciclo, codigo_curso, numero_grupo, horario, cedula_profesor
        "#,
    )
    .bind(datos.anio)
    .bind(&datos.numero_ciclo)
    .bind(&datos.codigo_curso)
    .bind(datos.numero_grupo)
    .bind(&datos.horario)
    .bind(&datos.cedula_profesor)
    .fetch_one(db_pool)
    .await
    .map_err(|e| AppError::from_constraint(e, duplicate_message(&datos)))?;

    tracing::info!("✅ Grupo creado con ID {}", grupo.id);
    Ok(grupo)
}

pub async fn update(db_pool: &SqlitePool, id: i64, payload: GrupoPayload) -> AppResult<Grupo> {
    let datos = payload.validar()?;
    tracing::info!("Actualizando grupo ID: {}", id);

    if find_by_id(db_pool, id).await?.is_none() {
        return Err(AppError::NotFound(format!("Grupo con ID {} no encontrado", id)));
    }
    validate_references(db_pool, &datos).await?;

    sqlx::query_as::<_, Grupo>(
        r#"
        UPDATE grupos
        SET anio = ?1, numero_ciclo = ?2, codigo_curso = ?3, numero_grupo = ?4,
            horario = ?5, cedula_profesor = ?6
        WHERE id = ?7
        RETURNING id, anio, numero_ciclo, codigo_curso, numero_grupo, horario, cedula_profesor
        "#,
    )
    .bind(datos.anio)
    .bind(&datos.numero_ciclo)
    .bind(&datos.codigo_curso)
    .bind(datos.numero_grupo)
    .bind(&datos.horario)
    .bind(&datos.cedula_profesor)
    .bind(id)
    .fetch_optional(db_pool)
    .await
    .map_err(|e| AppError::from_constraint(e, duplicate_message(&datos)))?
    .ok_or_else(|| AppError::NotFound(format!("Grupo con ID {} no encontrado", id)))
}

/// Falla con conflicto si el grupo tiene matrículas.
pub async fn delete(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Eliminando grupo ID: {}", id);
    let rows_affected = sqlx::query("DELETE FROM grupos WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(e, format!("El grupo {} tiene matrículas registradas", id))
        })?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("Grupo con ID {} no encontrado", id)));
    }
    Ok(())
}

/// Grupo con curso, profesor y lista de matriculados.
pub async fn details(db_pool: &SqlitePool, id: i64) -> AppResult<GrupoConDetalles> {
    let grupo = find_by_id(db_pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Grupo con ID {} no encontrado", id)))?;

    let curso = curso_service::find_by_codigo(db_pool, &grupo.codigo_curso).await?;
    let profesor = match grupo.cedula_profesor.as_deref() {
        Some(cedula) => profesor_service::find_by_cedula(db_pool, cedula).await?,
        None => None,
    };
    let alumnos = matricula_service::roster(db_pool, grupo.id).await?;

    Ok(GrupoConDetalles {
        grupo,
        curso,
        profesor,
        alumnos,
    })
}
