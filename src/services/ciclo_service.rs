// src/services/ciclo_service.rs
use crate::{
    db,
    error::{AppError, AppResult},
    models::ciclo::{Ciclo, CicloPayload},
};
use sqlx::{SqliteConnection, SqlitePool};

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Ciclo>> {
    tracing::debug!("Buscando todos los ciclos...");
    let ciclos = sqlx::query_as::<_, Ciclo>(
        r#"
        SELECT id, anio, numero, fecha_inicio, fecha_fin, activo
        FROM ciclos
        ORDER BY id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(ciclos)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Ciclo>> {
    tracing::debug!("Buscando ciclo por ID: {}", id);
    let ciclo = sqlx::query_as::<_, Ciclo>(
        r#"
        SELECT id, anio, numero, fecha_inicio, fecha_fin, activo
        FROM ciclos
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(ciclo)
}

pub async fn find_by_anio_numero(
    db_pool: &SqlitePool,
    anio: i64,
    numero: &str,
) -> AppResult<Option<Ciclo>> {
    tracing::debug!("Buscando ciclo {}-{}", anio, numero);
    let ciclo = sqlx::query_as::<_, Ciclo>(
        r#"
        SELECT id, anio, numero, fecha_inicio, fecha_fin, activo
        FROM ciclos
        WHERE anio = ?1 AND numero = ?2
        "#,
    )
    .bind(anio)
    .bind(numero)
    .fetch_optional(db_pool)
    .await?;
    Ok(ciclo)
}

pub async fn find_by_year(db_pool: &SqlitePool, anio: i64) -> AppResult<Vec<Ciclo>> {
    tracing::debug!("Buscando ciclos del año {}", anio);
    let ciclos = sqlx::query_as::<_, Ciclo>(
        r#"
        SELECT id, anio, numero, fecha_inicio, fecha_fin, activo
        FROM ciclos
        WHERE anio = ?1
        ORDER BY id ASC
        "#,
    )
    .bind(anio)
    .fetch_all(db_pool)
    .await?;
    Ok(ciclos)
}

pub async fn find_active(db_pool: &SqlitePool) -> AppResult<Option<Ciclo>> {
    tracing::debug!("Buscando el ciclo activo...");
    let ciclo = sqlx::query_as::<_, Ciclo>(
        r#"
        SELECT id, anio, numero, fecha_inicio, fecha_fin, activo
        FROM ciclos
        WHERE activo = 1
        "#,
    )
    .fetch_optional(db_pool)
    .await?;
    Ok(ciclo)
}

// Desactiva todos los ciclos dentro de la transacción en curso
async fn clear_active(conn: &mut SqliteConnection) -> AppResult {
    sqlx::query("UPDATE ciclos SET activo = 0 WHERE activo = 1")
        .execute(&mut *conn)
        .await?;
    Ok(())
}

fn duplicate_message(anio: i64, numero: &str) -> String {
    format!("Ya existe el ciclo {}-{}", anio, numero)
}

/// Crea un ciclo. Si llega activo, los demás se desactivan en la misma transacción.
pub async fn create(db_pool: &SqlitePool, payload: CicloPayload) -> AppResult<Ciclo> {
    let datos = payload.validar()?;
    tracing::info!("Creando ciclo {}-{}", datos.anio, datos.numero);

    let mut tx = db::begin_write(db_pool).await?;
    if datos.activo {
        clear_active(&mut *tx).await?;
    }

    let ciclo = sqlx::query_as::<_, Ciclo>(
        r#"
        INSERT INTO ciclos (anio, numero, fecha_inicio, fecha_fin, activo)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, anio, numero, fecha_inicio, fecha_fin, activo
        "#,
    )
    .bind(datos.anio)
    .bind(&datos.numero)
    .bind(&datos.fecha_inicio)
    .bind(&datos.fecha_fin)
    .bind(datos.activo)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| AppError::from_constraint(e, duplicate_message(datos.anio, &datos.numero)))?;

    tx.commit().await?;
    tracing::info!("✅ Ciclo {}-{} creado con ID {}", ciclo.anio, ciclo.numero, ciclo.id);
    Ok(ciclo)
}

pub async fn update(db_pool: &SqlitePool, id: i64, payload: CicloPayload) -> AppResult<Ciclo> {
    let datos = payload.validar()?;
    tracing::info!("Actualizando ciclo ID: {}", id);

    let mut tx = db::begin_write(db_pool).await?;
    if datos.activo {
        clear_active(&mut *tx).await?;
    }

    // Si el ID no existe, la transacción se descarta y nada cambia
    let ciclo = sqlx::query_as::<_, Ciclo>(
        r#"
        UPDATE ciclos
        SET anio = ?1, numero = ?2, fecha_inicio = ?3, fecha_fin = ?4, activo = ?5
        WHERE id = ?6
        RETURNING id, anio, numero, fecha_inicio, fecha_fin, activo
        "#,
    )
    .bind(datos.anio)
    .bind(&datos.numero)
    .bind(&datos.fecha_inicio)
    .bind(&datos.fecha_fin)
    .bind(datos.activo)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::from_constraint(e, duplicate_message(datos.anio, &datos.numero)))?
    .ok_or_else(|| AppError::NotFound(format!("Ciclo con ID {} no encontrado", id)))?;

    tx.commit().await?;
    Ok(ciclo)
}

pub async fn delete(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Eliminando ciclo ID: {}", id);
    let rows_affected = sqlx::query("DELETE FROM ciclos WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await
        .map_err(|e| {
            AppError::from_constraint(e, format!("El ciclo {} tiene grupos registrados", id))
        })?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!("Ciclo con ID {} no encontrado", id)));
    }
    Ok(())
}

/// Marca el ciclo como el único activo. Desactivar y activar ocurren en
/// una sola transacción: si el ID no existe no cambia nada.
pub async fn set_active(db_pool: &SqlitePool, id: i64) -> AppResult<Ciclo> {
    tracing::info!("Activando ciclo ID: {}", id);

    let mut tx = db::begin_write(db_pool).await?;

    // 1. Verifica que exista
    let existe: Option<i64> = sqlx::query_scalar("SELECT id FROM ciclos WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if existe.is_none() {
        tracing::warn!("No se puede activar: ciclo {} no existe.", id);
        return Err(AppError::NotFound(format!("Ciclo con ID {} no encontrado", id)));
    }

    // 2. Limpia y 3. activa
    clear_active(&mut *tx).await?;
    let ciclo = sqlx::query_as::<_, Ciclo>(
        r#"
        UPDATE ciclos SET activo = 1
        WHERE id = ?1
        RETURNING id, anio, numero, fecha_inicio, fecha_fin, activo
        "#,
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    // 4. Confirma
    tx.commit().await?;
    tracing::info!("✅ Ciclo {}-{} es ahora el ciclo activo.", ciclo.anio, ciclo.numero);
    Ok(ciclo)
}
