// src/services/usuario_service.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{Usuario, UsuarioPayload},
    services::auth_service,
};
use sqlx::SqlitePool;

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Usuario>> {
    tracing::debug!("Buscando todos los usuarios...");
    let usuarios = sqlx::query_as::<_, Usuario>(
        "SELECT id, cedula, clave_hash, rol FROM usuarios ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} usuarios.", usuarios.len());
    Ok(usuarios)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<Usuario>> {
    tracing::debug!("Buscando usuario por ID: {}", id);
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id, cedula, clave_hash, rol FROM usuarios WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(usuario)
}

pub async fn find_by_cedula(db_pool: &SqlitePool, cedula: &str) -> AppResult<Option<Usuario>> {
    tracing::debug!("Buscando usuario por cédula: {}", cedula);
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id, cedula, clave_hash, rol FROM usuarios WHERE cedula = ?1",
    )
    .bind(cedula)
    .fetch_optional(db_pool)
    .await?;
    Ok(usuario)
}

pub async fn create(
    db_pool: &SqlitePool,
    payload: UsuarioPayload,
    bcrypt_cost: u32,
) -> AppResult<Usuario> {
    let datos = payload.validar()?;
    tracing::info!("Creando usuario '{}' con rol {}", datos.cedula, datos.rol);

    // 1. La clave se guarda sólo como hash
    let clave_hash = auth_service::hash_password(datos.clave_requerida()?, bcrypt_cost).await?;

    // 2. Inserta; la cédula es única
    let usuario = sqlx::query_as::<_, Usuario>(
        r#"
        INSERT INTO usuarios (cedula, clave_hash, rol)
        VALUES (?1, ?2, ?3)
        RETURNING id, cedula, clave_hash, rol
        "#,
    )
    .bind(&datos.cedula)
    .bind(&clave_hash)
    .bind(datos.rol.as_str())
    .fetch_one(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe un usuario con cédula {}", datos.cedula))
    })?;

    tracing::info!("✅ Usuario '{}' creado con ID {}", usuario.cedula, usuario.id);
    Ok(usuario)
}

/// Reemplaza cédula y rol. La clave sólo cambia si viene con contenido.
pub async fn update(
    db_pool: &SqlitePool,
    id: i64,
    payload: UsuarioPayload,
    bcrypt_cost: u32,
) -> AppResult<Usuario> {
    let datos = payload.validar()?;
    tracing::info!("Actualizando usuario ID: {}", id);

    let nuevo_hash = match datos.clave.as_deref() {
        Some(clave) => Some(auth_service::hash_password(clave, bcrypt_cost).await?),
        None => None,
    };

    sqlx::query_as::<_, Usuario>(
        r#"
        UPDATE usuarios
        SET cedula = ?1, rol = ?2, clave_hash = COALESCE(?3, clave_hash)
        WHERE id = ?4
        RETURNING id, cedula, clave_hash, rol
        "#,
    )
    .bind(&datos.cedula)
    .bind(datos.rol.as_str())
    .bind(&nuevo_hash)
    .bind(id)
    .fetch_optional(db_pool)
    .await
    .map_err(|e| {
        AppError::from_constraint(e, format!("Ya existe un usuario con cédula {}", datos.cedula))
    })?
    .ok_or_else(|| AppError::NotFound(format!("Usuario con ID {} no encontrado", id)))
}

pub async fn delete(db_pool: &SqlitePool, id: i64) -> AppResult {
    tracing::info!("Eliminando usuario ID: {}", id);
    let rows_affected = sqlx::query("DELETE FROM usuarios WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Usuario {} no encontrado para eliminar.", id);
        return Err(AppError::NotFound(format!("Usuario con ID {} no encontrado", id)));
    }
    Ok(())
}
