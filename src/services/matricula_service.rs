// src/services/matricula_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        alumno::Alumno,
        matricula::{
            calcular_resumen, FilaMatriculaAlumno, FilaMatriculaDetalle, Matricula,
            MatriculaConAlumno, MatriculaConDetalles, MatriculaPayload, ResumenAcademico,
        },
    },
    services::{alumno_service, grupo_service},
};
use sqlx::SqlitePool;

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Matricula>> {
    tracing::debug!("Buscando todas las matrículas...");
    let matriculas = sqlx::query_as::<_, Matricula>(
        "SELECT id, alumno_id, grupo_id, nota FROM matriculas ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(matriculas)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Matricula>> {
    tracing::debug!("Buscando matrícula por ID: {}", id);
    let matricula = sqlx::query_as::<_, Matricula>(
        "SELECT id, alumno_id, grupo_id, nota FROM matriculas WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(matricula)
}

async fn require_student(db_pool: &SqlitePool, alumno_id: i64) -> AppResult {
    if alumno_service::find_by_id(db_pool, alumno_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Alumno con ID {} no encontrado",
            alumno_id
        )));
    }
    Ok(())
}

async fn require_group(db_pool: &SqlitePool, grupo_id: i64) -> AppResult {
    if grupo_service::find_by_id(db_pool, grupo_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Grupo con ID {} no encontrado",
            grupo_id
        )));
    }
    Ok(())
}

// Alumno y grupo referenciados en el cuerpo: su ausencia es un dato inválido
async fn validate_references(db_pool: &SqlitePool, datos: &MatriculaPayload) -> AppResult {
    if alumno_service::find_by_id(db_pool, datos.alumno_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "El alumno {} no existe",
            datos.alumno_id
        )));
    }
    if grupo_service::find_by_id(db_pool, datos.grupo_id).await?.is_none() {
        return Err(AppError::Validation(format!(
            "El grupo {} no existe",
            datos.grupo_id
        )));
    }
    Ok(())
}

fn duplicate_message(datos: &MatriculaPayload) -> String {
    format!(
        "El alumno {} ya está matriculado en el grupo {}",
        datos.alumno_id, datos.grupo_id
    )
}

pub async fn create(db_pool: &SqlitePool, payload: MatriculaPayload) -> AppResult<Matricula> {
    let datos = payload.validar()?;
    tracing::info!(
        "Matriculando alumno {} en grupo {}",
        datos.alumno_id,
        datos.grupo_id
    );
    validate_references(db_pool, &datos).await?;

    let matricula = sqlx::query_as::<_, Matricula>(
        r#"
        INSERT INTO matriculas (alumno_id, grupo_id, nota)
        VALUES (?1, ?2, ?3)
        RETURNING id, alumno_id, grupo_id, nota
        "#,
    )
    .bind(datos.alumno_id)
    .bind(datos.grupo_id)
    .bind(datos.nota)
    .fetch_one(db_pool)
    .await
    .map_err(|e| AppError::from_constraint(e, duplicate_message(&datos)))?;

    tracing::info!("✅ Matrícula creada con ID {}", matricula.id);
    Ok(matricula)
}

/// Reemplaza la matrícula completa; también se usa para registrar notas.
pub async fn update(
    db_pool: &SqlitePool,
    id: i64,
    payload: MatriculaPayload,
) -> AppResult<Matricula> {
    let datos = payload.validar()?;
    tracing::info!("Actualizando matrícula ID: {}", id);

    if find_by_id(db_pool, id).await?.is_none() {
        return Err(AppError::NotFound(format!("Matrícula con ID {} no encontrada", id)));
    }
    validate_references(db_pool, &datos).await?;

    sqlx::query_as::<_, Matricula>(
        r#"
        UPDATE matriculas SET alumno_id = ?1, grupo_id = ?2, nota = ?3
        WHERE id = ?4
        RETURNING id, alumno_id, grupo_id, nota
        "#,
    )
    .bind(datos.alumno_id)
    .bind(datos.grupo_id)
    .bind(datos.nota)
    .bind(id)
    .fetch_optional(db_pool)
    .await
    .map_err(|e| AppError::from_constraint(e, duplicate_message(&datos)))?
    .ok_or_else(|| AppError::NotFound(format!("Matrícula con ID {} no encontrada", id)))
}

/// Una matrícula con nota ya no se puede retirar.
pub async fn delete(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Eliminando matrícula ID: {}", id);

    let matricula = find_by_id(db_pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Matrícula con ID {} no encontrada", id)))?;
    if let Some(nota) = matricula.nota {
        tracing::warn!("Matrícula {} ya tiene nota ({}); no se elimina.", id, nota);
        return Err(AppError::Conflict(format!(
            "La matrícula {} ya tiene nota registrada",
            id
        )));
    }

    // La condición sobre la nota cubre una calificación registrada entre ambas consultas
    let rows_affected = sqlx::query("DELETE FROM matriculas WHERE id = ?1 AND nota IS NULL")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();
    if rows_affected == 0 {
        return Err(AppError::Conflict(format!(
            "La matrícula {} ya tiene nota registrada",
            id
        )));
    }
    Ok(())
}

/// Matrículas del alumno con grupo, curso y ciclo en una sola consulta.
pub async fn find_by_student_with_details(
    db_pool: &SqlitePool,
    alumno_id: i64,
) -> AppResult<Vec<MatriculaConDetalles>> {
    tracing::debug!("Buscando historial del alumno ID: {}", alumno_id);
    require_student(db_pool, alumno_id).await?;

    let filas = sqlx::query_as::<_, FilaMatriculaDetalle>(
        r#"
        SELECT m.id, m.alumno_id, m.grupo_id, m.nota,
               g.id AS g_id, g.anio AS g_anio, g.numero_ciclo AS g_numero_ciclo,
               g.codigo_curso AS g_codigo_curso, g.numero_grupo AS g_numero_grupo,
               g.horario AS g_horario, g.cedula_profesor AS g_cedula_profesor,
               c.id AS c_id, c.codigo AS c_codigo, c.nombre AS c_nombre,
               c.creditos AS c_creditos, c.horas_semanales AS c_horas_semanales,
               ci.id AS ci_id, ci.anio AS ci_anio, ci.numero AS ci_numero,
               ci.fecha_inicio AS ci_fecha_inicio, ci.fecha_fin AS ci_fecha_fin,
               ci.activo AS ci_activo
        FROM matriculas m
        LEFT JOIN grupos g ON g.id = m.grupo_id
        LEFT JOIN cursos c ON c.codigo = g.codigo_curso
        LEFT JOIN ciclos ci ON ci.anio = g.anio AND ci.numero = g.numero_ciclo
        WHERE m.alumno_id = ?1
        ORDER BY m.id ASC
        "#,
    )
    .bind(alumno_id)
    .fetch_all(db_pool)
    .await?;

    Ok(filas.into_iter().map(MatriculaConDetalles::from).collect())
}

pub async fn find_by_group(db_pool: &SqlitePool, grupo_id: i64) -> AppResult<Vec<Matricula>> {
    tracing::debug!("Buscando matrículas del grupo ID: {}", grupo_id);
    require_group(db_pool, grupo_id).await?;

    let matriculas = sqlx::query_as::<_, Matricula>(
        r#"
        SELECT id, alumno_id, grupo_id, nota
        FROM matriculas
        WHERE grupo_id = ?1
        ORDER BY id ASC
        "#,
    )
    .bind(grupo_id)
    .fetch_all(db_pool)
    .await?;
    Ok(matriculas)
}

pub async fn find_students_by_group(
    db_pool: &SqlitePool,
    grupo_id: i64,
) -> AppResult<Vec<Alumno>> {
    tracing::debug!("Buscando alumnos del grupo ID: {}", grupo_id);
    require_group(db_pool, grupo_id).await?;

    let alumnos = sqlx::query_as::<_, Alumno>(
        r#"
        SELECT a.id, a.cedula, a.nombre, a.telefono, a.email, a.fecha_nacimiento, a.codigo_carrera
        FROM matriculas m
        JOIN alumnos a ON a.id = m.alumno_id
        WHERE m.grupo_id = ?1
        ORDER BY m.id ASC
        "#,
    )
    .bind(grupo_id)
    .fetch_all(db_pool)
    .await?;
    Ok(alumnos)
}

/// Matrículas del grupo con su alumno (lista de clase).
pub async fn roster(db_pool: &SqlitePool, grupo_id: i64) -> AppResult<Vec<MatriculaConAlumno>> {
    let filas = sqlx::query_as::<_, FilaMatriculaAlumno>(
        r#"
        SELECT m.id, m.alumno_id, m.grupo_id, m.nota,
               a.id AS a_id, a.cedula AS a_cedula, a.nombre AS a_nombre,
               a.telefono AS a_telefono, a.email AS a_email,
               a.fecha_nacimiento AS a_fecha_nacimiento, a.codigo_carrera AS a_codigo_carrera
        FROM matriculas m
        LEFT JOIN alumnos a ON a.id = m.alumno_id
        WHERE m.grupo_id = ?1
        ORDER BY m.id ASC
        "#,
    )
    .bind(grupo_id)
    .fetch_all(db_pool)
    .await?;

    Ok(filas.into_iter().map(MatriculaConAlumno::from).collect())
}

/// Promedio ponderado, cursos completados y créditos aprobados del alumno.
pub async fn academic_summary(db_pool: &SqlitePool, alumno_id: i64) -> AppResult<ResumenAcademico> {
    tracing::debug!("Calculando resumen académico del alumno ID: {}", alumno_id);
    require_student(db_pool, alumno_id).await?;

    let items: Vec<(Option<i64>, Option<i64>)> = sqlx::query_as(
        r#"
        SELECT c.creditos, m.nota
        FROM matriculas m
        LEFT JOIN grupos g ON g.id = m.grupo_id
        LEFT JOIN cursos c ON c.codigo = g.codigo_curso
        WHERE m.alumno_id = ?1
        "#,
    )
    .bind(alumno_id)
    .fetch_all(db_pool)
    .await?;

    let items: Vec<(i64, Option<i64>)> = items
        .into_iter()
        .map(|(creditos, nota)| (creditos.unwrap_or(0), nota))
        .collect();
    Ok(calcular_resumen(&items))
}
