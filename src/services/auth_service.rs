// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::Usuario,
    services::usuario_service,
};
use sqlx::SqlitePool;

/// Verifica una cédula y una clave contra la tabla de usuarios.
/// Devuelve `None` tanto si la cédula no existe como si la clave no coincide.
pub async fn authenticate(
    db_pool: &SqlitePool,
    cedula: &str,
    clave: &str,
) -> AppResult<Option<Usuario>> {
    tracing::debug!("Intento de login para cédula: {}", cedula);

    let Some(usuario) = usuario_service::find_by_cedula(db_pool, cedula.trim()).await? else {
        tracing::debug!("Cédula '{}' no registrada.", cedula);
        return Ok(None);
    };

    if verify_password(clave, &usuario.clave_hash).await? {
        tracing::info!("Login correcto para '{}' ({})", usuario.cedula, usuario.rol);
        Ok(Some(usuario))
    } else {
        tracing::debug!("Clave incorrecta para '{}'.", cedula);
        Ok(None)
    }
}

/// Verifica si la clave coincide con el hash guardado.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || bcrypt::verify(&password, &stored_hash))
        .await
        .map_err(|e| {
            tracing::error!("Error en spawn_blocking (verify_password): {:?}", e);
            AppError::InternalServerError
        })?
        .map_err(|e| {
            tracing::error!("Error bcrypt al verificar la clave: {:?}", e);
            AppError::PasswordHashingError
        })
}

/// Genera un hash bcrypt con el costo indicado.
pub async fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || bcrypt::hash(&password, cost))
        .await
        .map_err(|e| {
            tracing::error!("Error en spawn_blocking (hash_password): {:?}", e);
            AppError::InternalServerError
        })?
        .map_err(|e| {
            tracing::error!("Error bcrypt al generar el hash: {:?}", e);
            AppError::PasswordHashingError
        })
}
