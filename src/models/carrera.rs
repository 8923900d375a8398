// src/models/carrera.rs
use super::curso::Curso;
use super::requerido;
use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Carrera {
    pub id: i64,
    pub codigo: String,
    pub nombre: String,
    pub titulo: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarreraPayload {
    pub codigo: String,
    pub nombre: String,
    pub titulo: String,
}

impl CarreraPayload {
    pub fn validar(self) -> AppResult<Self> {
        Ok(Self {
            codigo: requerido("codigo", self.codigo)?,
            nombre: requerido("nombre", self.nombre)?,
            titulo: requerido("titulo", self.titulo)?,
        })
    }
}

/// Un curso dentro del plan de una carrera, con su posición.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CursoConOrden {
    pub asociacion_id: i64,
    pub orden: i64,
    #[sqlx(flatten)]
    pub curso: Curso,
}

/// Carrera con sus cursos ordenados por `orden`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarreraConCursos {
    pub carrera: Carrera,
    pub cursos: Vec<CursoConOrden>,
}
