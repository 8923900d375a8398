// src/models/curso.rs
use super::{no_negativo, requerido};
use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Curso {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub creditos: i64,
    pub horas_semanales: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursoPayload {
    pub codigo: String,
    pub nombre: String,
    pub creditos: i64,
    pub horas_semanales: i64,
}

impl CursoPayload {
    pub fn validar(self) -> AppResult<Self> {
        Ok(Self {
            codigo: requerido("codigo", self.codigo)?,
            nombre: requerido("nombre", self.nombre)?,
            creditos: no_negativo("creditos", self.creditos)?,
            horas_semanales: no_negativo("horasSemanales", self.horas_semanales)?,
        })
    }
}
