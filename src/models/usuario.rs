// src/models/usuario.rs
use super::requerido;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use thiserror::Error;

/// Roles del sistema. En la base de datos y en JSON viajan en minúscula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Rol {
    Admin,
    Profesor,
    Alumno,
    Registrador,
}

#[derive(Debug, Error)]
#[error("Rol desconocido: '{0}'")]
pub struct RolInvalido(pub String);

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Admin => "admin",
            Rol::Profesor => "profesor",
            Rol::Alumno => "alumno",
            Rol::Registrador => "registrador",
        }
    }
}

impl fmt::Display for Rol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Rol {
    type Err = RolInvalido;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" | "administrador" => Ok(Rol::Admin),
            "profesor" => Ok(Rol::Profesor),
            "alumno" => Ok(Rol::Alumno),
            "registrador" => Ok(Rol::Registrador),
            _ => Err(RolInvalido(s.to_string())),
        }
    }
}

impl TryFrom<String> for Rol {
    type Error = RolInvalido;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// Representa un usuario leído de la tabla 'usuarios'
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub cedula: String,
    // Nunca sale del servidor
    #[serde(skip)]
    pub clave_hash: String,
    #[sqlx(try_from = "String")]
    pub rol: Rol,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioPayload {
    pub cedula: String,
    /// En una actualización, una clave en blanco conserva la actual.
    #[serde(default)]
    pub clave: Option<String>,
    pub rol: Rol,
}

impl UsuarioPayload {
    pub fn validar(self) -> AppResult<Self> {
        Ok(Self {
            cedula: requerido("cedula", self.cedula)?,
            clave: self.clave.filter(|c| !c.trim().is_empty()),
            rol: self.rol,
        })
    }

    /// La clave es obligatoria al crear.
    pub fn clave_requerida(&self) -> AppResult<&str> {
        self.clave
            .as_deref()
            .ok_or_else(|| AppError::Validation("El campo 'clave' es obligatorio".into()))
    }
}

// Cuerpo de POST /login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub cedula: String,
    pub clave: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: Usuario,
    pub token: String,
}
