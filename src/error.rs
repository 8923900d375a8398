// src/error.rs
use crate::config::ConfigError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error en la base de datos: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Error de migración de la base de datos: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Error de configuración: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Error al procesar la clave")]
    PasswordHashingError,

    #[error("Credenciales inválidas")]
    InvalidCredentials,

    // --- Taxonomía de errores de la API ---
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Error interno inesperado")]
    InternalServerError,
}

impl AppError {
    /// Etiqueta estable que viaja en el sobre de error (`kind`).
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::InvalidCredentials => "unauthorized",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            _ => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Clasifica violaciones de restricciones de SQLite.
    /// UNIQUE y FOREIGN KEY se reportan como conflicto con `mensaje`;
    /// cualquier otro error sigue siendo un error de base de datos.
    pub fn from_constraint(err: sqlx::Error, mensaje: impl Into<String>) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                let mensaje = mensaje.into();
                tracing::warn!("Restricción violada ({}): {}", db_err.message(), mensaje);
                return AppError::Conflict(mensaje);
            }
        }
        AppError::SqlxError(err)
    }
}

// Cómo convertir AppError en una respuesta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        let user_message = match &self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                tracing::error!("Error procesado: {:?}", self);
                "Error al acceder a los datos.".to_string()
            }
            AppError::ConfigError(_) => {
                tracing::error!("Error procesado: {:?}", self);
                "Error de configuración.".to_string()
            }
            AppError::PasswordHashingError => {
                tracing::error!("Error procesado: {:?}", self);
                "Error al procesar credenciales.".to_string()
            }
            AppError::InternalServerError => {
                tracing::error!("Error procesado: {:?}", self);
                "Ocurrió un error inesperado.".to_string()
            }
            // Mensaje genérico: no revela si la cédula existe
            AppError::InvalidCredentials => {
                tracing::warn!("Solicitud rechazada: credenciales inválidas");
                "Cédula o clave inválidas.".to_string()
            }
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::Conflict(msg) => {
                tracing::warn!("Solicitud rechazada ({}): {}", status.as_u16(), msg);
                msg.clone()
            }
        };

        (
            status,
            Json(json!({ "error": user_message, "kind": self.kind() })),
        )
            .into_response()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(format!("Parámetro de ruta inválido: {}", rejection.body_text()))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Cuerpo de la solicitud inválido: {}", rejection.body_text()))
    }
}

// Tipo Result estándar de la aplicación
pub type AppResult<T = ()> = Result<T, AppError>;
