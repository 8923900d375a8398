// src/models/profesor.rs
use super::{email, opcional, requerido};
use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Profesor {
    pub id: i64,
    pub cedula: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfesorPayload {
    pub cedula: String,
    pub nombre: String,
    #[serde(default)]
    pub telefono: Option<String>,
    pub email: String,
}

impl ProfesorPayload {
    pub fn validar(self) -> AppResult<Self> {
        Ok(Self {
            cedula: requerido("cedula", self.cedula)?,
            nombre: requerido("nombre", self.nombre)?,
            telefono: opcional(self.telefono),
            email: email(self.email)?,
        })
    }
}
