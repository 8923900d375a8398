// src/models/alumno.rs
use super::{email, fecha, opcional, requerido};
use crate::error::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa un alumno leído de la tabla 'alumnos'
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Alumno {
    pub id: i64,
    pub cedula: String,
    pub nombre: String,
    pub telefono: Option<String>,
    pub email: String,
    pub fecha_nacimiento: NaiveDate,
    pub codigo_carrera: Option<String>,
}

// Datos recibidos al crear o actualizar un alumno
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumnoPayload {
    pub cedula: String,
    pub nombre: String,
    #[serde(default)]
    pub telefono: Option<String>,
    pub email: String,
    pub fecha_nacimiento: String,
    #[serde(default)]
    pub codigo_carrera: Option<String>,
}

impl AlumnoPayload {
    pub fn validar(self) -> AppResult<Self> {
        // Se guarda en forma canónica AAAA-MM-DD
        let fecha_nacimiento =
            fecha("fechaNacimiento", &requerido("fechaNacimiento", self.fecha_nacimiento)?)?
                .to_string();

        Ok(Self {
            cedula: requerido("cedula", self.cedula)?,
            nombre: requerido("nombre", self.nombre)?,
            telefono: opcional(self.telefono),
            email: email(self.email)?,
            fecha_nacimiento,
            codigo_carrera: opcional(self.codigo_carrera),
        })
    }
}
