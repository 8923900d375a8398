// src/models/grupo.rs
use super::{curso::Curso, matricula::MatriculaConAlumno, opcional, profesor::Profesor, requerido};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Oferta de un curso en un ciclo. La llave natural es
/// (anio, numero_ciclo, codigo_curso, numero_grupo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Grupo {
    pub id: i64,
    pub anio: i64,
    pub numero_ciclo: String,
    pub codigo_curso: String,
    pub numero_grupo: i64,
    pub horario: Option<String>,
    pub cedula_profesor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrupoPayload {
    pub anio: i64,
    pub numero_ciclo: String,
    pub codigo_curso: String,
    pub numero_grupo: i64,
    #[serde(default)]
    pub horario: Option<String>,
    #[serde(default)]
    pub cedula_profesor: Option<String>,
}

impl GrupoPayload {
    pub fn validar(self) -> AppResult<Self> {
        if self.numero_grupo <= 0 {
            return Err(AppError::Validation(
                "El campo 'numeroGrupo' debe ser positivo".into(),
            ));
        }
        Ok(Self {
            anio: self.anio,
            numero_ciclo: requerido("numeroCiclo", self.numero_ciclo)?,
            codigo_curso: requerido("codigoCurso", self.codigo_curso)?,
            numero_grupo: self.numero_grupo,
            horario: opcional(self.horario),
            cedula_profesor: opcional(self.cedula_profesor),
        })
    }
}

/// Grupo con su curso, su profesor y la lista de matriculados.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrupoConDetalles {
    pub grupo: Grupo,
    pub curso: Option<Curso>,
    pub profesor: Option<Profesor>,
    pub alumnos: Vec<MatriculaConAlumno>,
}
