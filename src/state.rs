// src/state.rs
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    /// Costo bcrypt usado al guardar claves de usuarios.
    pub bcrypt_cost: u32,
}

// Permite extraer el pool directamente en los handlers
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
