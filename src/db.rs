// src/db.rs
use crate::{config::AppConfig, error::AppResult};
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Transaction;
use std::str::FromStr;
use std::time::Duration;

/// Abre el pool configurado y deja el esquema al día.
pub async fn create_db_pool(config: &AppConfig) -> AppResult<SqlitePool> {
    tracing::info!("Conectando a la base de datos: {}", config.database_url);

    let pool = connect(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn connect(database_url: &str, max_connections: u32) -> AppResult<SqlitePool> {
    // Crear el archivo si no existe; las llaves foráneas deben estar activas
    // en cada conexión para que RESTRICT y SET NULL tengan efecto.
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Transacción de escritura (`BEGIN IMMEDIATE`). El candado se toma al
/// empezar; otro escritor concurrente espera hasta `busy_timeout`.
pub async fn begin_write(pool: &SqlitePool) -> AppResult<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

pub async fn run_migrations(pool: &SqlitePool) -> AppResult {
    tracing::info!("Ejecutando migraciones de la base de datos...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Migraciones completadas.");
    Ok(())
}
