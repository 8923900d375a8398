// src/models/ciclo.rs
use super::{fecha, opcional, requerido};
use crate::error::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Período lectivo identificado por (anio, numero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ciclo {
    pub id: i64,
    pub anio: i64,
    pub numero: String,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub activo: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CicloPayload {
    pub anio: i64,
    pub numero: String,
    #[serde(default)]
    pub fecha_inicio: Option<String>,
    #[serde(default)]
    pub fecha_fin: Option<String>,
    #[serde(default)]
    pub activo: bool,
}

impl CicloPayload {
    pub fn validar(self) -> AppResult<Self> {
        if self.anio <= 0 {
            return Err(AppError::Validation(
                "El campo 'anio' debe ser positivo".into(),
            ));
        }

        let inicio = opcional(self.fecha_inicio)
            .map(|f| fecha("fechaInicio", &f))
            .transpose()?;
        let fin = opcional(self.fecha_fin)
            .map(|f| fecha("fechaFin", &f))
            .transpose()?;
        if let (Some(inicio), Some(fin)) = (inicio, fin) {
            if fin < inicio {
                return Err(AppError::Validation(
                    "La fecha de fin no puede ser anterior a la de inicio".into(),
                ));
            }
        }

        Ok(Self {
            anio: self.anio,
            numero: requerido("numero", self.numero)?,
            fecha_inicio: inicio.map(|f| f.to_string()),
            fecha_fin: fin.map(|f| f.to_string()),
            activo: self.activo,
        })
    }
}
