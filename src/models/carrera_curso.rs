// src/models/carrera_curso.rs
use super::{no_negativo, requerido};
use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Asociación carrera-curso con los códigos de ambos lados resueltos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CarreraCurso {
    pub id: i64,
    pub carrera_id: i64,
    pub curso_id: i64,
    pub codigo_carrera: String,
    pub codigo_curso: String,
    pub orden: i64,
}

// Cuerpo de POST /carreras-cursos
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarreraCursoPayload {
    pub codigo_carrera: String,
    pub codigo_curso: String,
    #[serde(default)]
    pub orden: i64,
}

impl CarreraCursoPayload {
    pub fn validar(self) -> AppResult<Self> {
        Ok(Self {
            codigo_carrera: requerido("codigoCarrera", self.codigo_carrera)?,
            codigo_curso: requerido("codigoCurso", self.codigo_curso)?,
            orden: no_negativo("orden", self.orden)?,
        })
    }
}

// Cuerpo de PUT /carreras-cursos/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ReordenPayload {
    pub orden: i64,
}

/// Mueve `id` a la posición `posicion` (acotada al final de la lista)
/// y devuelve el nuevo orden. Si `id` no estaba, se inserta.
pub fn reubicar(ids: &[i64], id: i64, posicion: usize) -> Vec<i64> {
    let mut orden: Vec<i64> = ids.iter().copied().filter(|&x| x != id).collect();
    let posicion = posicion.min(orden.len());
    orden.insert(posicion, id);
    orden
}
