// src/services/carrera_curso_service.rs
//! Plan de estudios: cursos de cada carrera en un orden contiguo 0..n-1.
//!
//! Toda operación que cambia el orden corre en una transacción y al final
//! renumera la carrera completa, así nunca quedan huecos ni posiciones repetidas.
use crate::{
    db,
    error::{AppError, AppResult},
    models::{
        carrera::{Carrera, CursoConOrden},
        carrera_curso::{reubicar, CarreraCurso, CarreraCursoPayload},
    },
    services::{carrera_service, curso_service},
};
use sqlx::{SqliteConnection, SqliteExecutor, SqlitePool};

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<CarreraCurso>> {
    tracing::debug!("Buscando todas las asociaciones carrera-curso...");
    let asociaciones = sqlx::query_as::<_, CarreraCurso>(
        r#"
        SELECT cc.id, cc.carrera_id, cc.curso_id,
               ca.codigo AS codigo_carrera, cu.codigo AS codigo_curso, cc.orden
        FROM carrera_cursos cc
        JOIN carreras ca ON ca.id = cc.carrera_id
        JOIN cursos cu ON cu.id = cc.curso_id
        ORDER BY cc.carrera_id ASC, cc.orden ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(asociaciones)
}

/// Acepta el pool o una transacción abierta.
pub async fn find_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> AppResult<Option<CarreraCurso>> {
    let asociacion = sqlx::query_as::<_, CarreraCurso>(
        r#"
        SELECT cc.id, cc.carrera_id, cc.curso_id,
               ca.codigo AS codigo_carrera, cu.codigo AS codigo_curso, cc.orden
        FROM carrera_cursos cc
        JOIN carreras ca ON ca.id = cc.carrera_id
        JOIN cursos cu ON cu.id = cc.curso_id
        WHERE cc.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    Ok(asociacion)
}

pub async fn find_by_program_code(
    db_pool: &SqlitePool,
    codigo: &str,
) -> AppResult<Vec<CarreraCurso>> {
    tracing::debug!("Buscando plan de la carrera {}", codigo);
    if carrera_service::find_by_codigo(db_pool, codigo).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Carrera con código {} no encontrada",
            codigo
        )));
    }

    let asociaciones = sqlx::query_as::<_, CarreraCurso>(
        r#"
        SELECT cc.id, cc.carrera_id, cc.curso_id,
               ca.codigo AS codigo_carrera, cu.codigo AS codigo_curso, cc.orden
        FROM carrera_cursos cc
        JOIN carreras ca ON ca.id = cc.carrera_id
        JOIN cursos cu ON cu.id = cc.curso_id
        WHERE ca.codigo = ?1
        ORDER BY cc.orden ASC
        "#,
    )
    .bind(codigo)
    .fetch_all(db_pool)
    .await?;
    Ok(asociaciones)
}

/// Cursos de la carrera ordenados por `orden`.
pub async fn courses_of_program(
    db_pool: &SqlitePool,
    carrera_id: i64,
) -> AppResult<Vec<CursoConOrden>> {
    tracing::debug!("Buscando cursos de la carrera ID: {}", carrera_id);
    if carrera_service::find_by_id(db_pool, carrera_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Carrera con ID {} no encontrada",
            carrera_id
        )));
    }

    let cursos = sqlx::query_as::<_, CursoConOrden>(
        r#"
        SELECT cc.id AS asociacion_id, cc.orden,
               c.id, c.codigo, c.nombre, c.creditos, c.horas_semanales
        FROM carrera_cursos cc
        JOIN cursos c ON c.id = cc.curso_id
        WHERE cc.carrera_id = ?1
        ORDER BY cc.orden ASC
        "#,
    )
    .bind(carrera_id)
    .fetch_all(db_pool)
    .await?;
    Ok(cursos)
}

/// Carreras cuyo plan incluye el curso.
pub async fn programs_of_course(db_pool: &SqlitePool, curso_id: i64) -> AppResult<Vec<Carrera>> {
    tracing::debug!("Buscando carreras del curso ID: {}", curso_id);
    if curso_service::find_by_id(db_pool, curso_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Curso con ID {} no encontrado",
            curso_id
        )));
    }

    let carreras = sqlx::query_as::<_, Carrera>(
        r#"
        SELECT ca.id, ca.codigo, ca.nombre, ca.titulo
        FROM carrera_cursos cc
        JOIN carreras ca ON ca.id = cc.carrera_id
        WHERE cc.curso_id = ?1
        ORDER BY ca.id ASC
        "#,
    )
    .bind(curso_id)
    .fetch_all(db_pool)
    .await?;
    Ok(carreras)
}

// --- Operaciones de orden (siempre dentro de una transacción) ---

// Reescribe `orden` con la posición de cada ID en la lista
async fn renumber(conn: &mut SqliteConnection, ids: &[i64]) -> AppResult {
    for (orden, id) in ids.iter().enumerate() {
        sqlx::query("UPDATE carrera_cursos SET orden = ?1 WHERE id = ?2")
            .bind(orden as i64)
            .bind(id)
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}

async fn program_ids(conn: &mut SqliteConnection, carrera_id: i64) -> AppResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>(
        "SELECT id FROM carrera_cursos WHERE carrera_id = ?1 ORDER BY orden ASC, id ASC",
    )
    .bind(carrera_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(ids)
}

async fn find_pair(
    conn: &mut SqliteConnection,
    carrera_id: i64,
    curso_id: i64,
) -> AppResult<Option<i64>> {
    let id = sqlx::query_scalar(
        "SELECT id FROM carrera_cursos WHERE carrera_id = ?1 AND curso_id = ?2",
    )
    .bind(carrera_id)
    .bind(curso_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(id)
}

async fn insert_pair(conn: &mut SqliteConnection, carrera_id: i64, curso_id: i64) -> AppResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO carrera_cursos (carrera_id, curso_id, orden)
        VALUES (?1, ?2, 0)
        RETURNING id
        "#,
    )
    .bind(carrera_id)
    .bind(curso_id)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| AppError::from_constraint(e, "El curso ya pertenece a la carrera"))?;
    Ok(id)
}

/// Deja la asociación en `posicion` (acotada al final) y renumera la carrera.
async fn move_to(
    conn: &mut SqliteConnection,
    carrera_id: i64,
    asociacion_id: i64,
    posicion: usize,
) -> AppResult {
    let actuales = program_ids(&mut *conn, carrera_id).await?;
    let nuevo = reubicar(&actuales, asociacion_id, posicion);
    renumber(&mut *conn, &nuevo).await
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Asociación carrera-curso {} no encontrada", id))
}

/// Agrega el curso a la carrera en la posición pedida, o lo mueve allí
/// si ya formaba parte del plan.
pub async fn add_course_to_program(
    db_pool: &SqlitePool,
    payload: CarreraCursoPayload,
) -> AppResult<CarreraCurso> {
    let datos = payload.validar()?;
    tracing::info!(
        "Ubicando curso {} en la carrera {} (posición {})",
        datos.codigo_curso,
        datos.codigo_carrera,
        datos.orden
    );

    let carrera = carrera_service::find_by_codigo(db_pool, &datos.codigo_carrera)
        .await?
        .ok_or_else(|| {
            AppError::Validation(format!("La carrera {} no existe", datos.codigo_carrera))
        })?;
    let curso = curso_service::find_by_codigo(db_pool, &datos.codigo_curso)
        .await?
        .ok_or_else(|| AppError::Validation(format!("El curso {} no existe", datos.codigo_curso)))?;

    let mut tx = db::begin_write(db_pool).await?;
    let asociacion_id = match find_pair(&mut *tx, carrera.id, curso.id).await? {
        Some(id) => id,
        None => insert_pair(&mut *tx, carrera.id, curso.id).await?,
    };
    move_to(&mut *tx, carrera.id, asociacion_id, datos.orden as usize).await?;
    let asociacion = find_by_id(&mut *tx, asociacion_id)
        .await?
        .ok_or_else(|| not_found(asociacion_id))?;
    tx.commit().await?;

    Ok(asociacion)
}

/// Mueve una asociación existente a `posicion` (subir / bajar en el plan).
/// Nunca crea asociaciones: si la fila ya no existe responde NotFound.
pub async fn reorder(db_pool: &SqlitePool, id: i64, posicion: i64) -> AppResult<CarreraCurso> {
    if posicion < 0 {
        return Err(AppError::Validation(
            "El campo 'orden' no puede ser negativo".into(),
        ));
    }
    tracing::info!("Moviendo asociación {} a la posición {}", id, posicion);

    let mut tx = db::begin_write(db_pool).await?;
    let carrera_id: Option<i64> =
        sqlx::query_scalar("SELECT carrera_id FROM carrera_cursos WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some(carrera_id) = carrera_id else {
        return Err(not_found(id));
    };

    move_to(&mut *tx, carrera_id, id, posicion as usize).await?;
    let asociacion = find_by_id(&mut *tx, id).await?.ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    Ok(asociacion)
}

/// Agrega el curso al final del plan. Si ya estaba, no cambia nada.
pub async fn append_course(
    db_pool: &SqlitePool,
    carrera_id: i64,
    curso_id: i64,
) -> AppResult<CarreraCurso> {
    tracing::info!("Agregando curso {} al final de la carrera {}", curso_id, carrera_id);
    if carrera_service::find_by_id(db_pool, carrera_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Carrera con ID {} no encontrada",
            carrera_id
        )));
    }
    if curso_service::find_by_id(db_pool, curso_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Curso con ID {} no encontrado",
            curso_id
        )));
    }

    let mut tx = db::begin_write(db_pool).await?;
    let asociacion_id = match find_pair(&mut *tx, carrera_id, curso_id).await? {
        Some(id) => id,
        None => {
            let id = insert_pair(&mut *tx, carrera_id, curso_id).await?;
            move_to(&mut *tx, carrera_id, id, usize::MAX).await?;
            id
        }
    };
    let asociacion = find_by_id(&mut *tx, asociacion_id)
        .await?
        .ok_or_else(|| not_found(asociacion_id))?;
    tx.commit().await?;

    Ok(asociacion)
}

/// Quita la asociación y compacta el orden del resto de la carrera.
pub async fn remove_course_from_program(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Quitando asociación carrera-curso {}", id);

    let mut tx = db::begin_write(db_pool).await?;
    let carrera_id: Option<i64> =
        sqlx::query_scalar("DELETE FROM carrera_cursos WHERE id = ?1 RETURNING carrera_id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
    let Some(carrera_id) = carrera_id else {
        return Err(AppError::NotFound(format!(
            "Asociación carrera-curso {} no encontrada",
            id
        )));
    };

    let restantes = program_ids(&mut *tx, carrera_id).await?;
    renumber(&mut *tx, &restantes).await?;
    tx.commit().await?;

    tracing::info!("✅ Asociación {} eliminada; plan de la carrera {} compactado.", id, carrera_id);
    Ok(())
}

/// Variante por par (carrera, curso) de `remove_course_from_program`.
pub async fn remove_pair(db_pool: &SqlitePool, carrera_id: i64, curso_id: i64) -> AppResult {
    let asociacion_id: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM carrera_cursos WHERE carrera_id = ?1 AND curso_id = ?2",
    )
    .bind(carrera_id)
    .bind(curso_id)
    .fetch_optional(db_pool)
    .await?;

    match asociacion_id {
        Some(id) => remove_course_from_program(db_pool, id).await,
        None => Err(AppError::NotFound(format!(
            "El curso {} no forma parte de la carrera {}",
            curso_id, carrera_id
        ))),
    }
}
