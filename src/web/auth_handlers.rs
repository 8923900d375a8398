// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{LoginRequest, LoginResponse},
    services::auth_service,
    state::AppState,
    web::extract::Json,
};
use axum::extract::State;
use uuid::Uuid;

// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(form): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    tracing::info!("Intento de login para cédula: {}", form.cedula);

    match auth_service::authenticate(&state.db_pool, &form.cedula, &form.clave).await? {
        Some(user) => {
            // Token opaco: el backend no valida sesiones
            let token = Uuid::new_v4().to_string();
            tracing::info!("✅ Login correcto para: {}", user.cedula);
            Ok(Json(LoginResponse { user, token }))
        }
        None => {
            tracing::warn!("Credenciales inválidas para: {}", form.cedula);
            Err(AppError::InvalidCredentials)
        }
    }
}
