// src/models/matricula.rs
use super::{alumno::Alumno, ciclo::Ciclo, curso::Curso, grupo::Grupo};
use crate::error::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa una matrícula; `nota` vacía significa "sin calificar"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Matricula {
    pub id: i64,
    pub alumno_id: i64,
    pub grupo_id: i64,
    pub nota: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculaPayload {
    pub alumno_id: i64,
    pub grupo_id: i64,
    #[serde(default)]
    pub nota: Option<i64>,
}

impl MatriculaPayload {
    pub fn validar(self) -> AppResult<Self> {
        if let Some(nota) = self.nota {
            if !(0..=100).contains(&nota) {
                return Err(AppError::Validation(format!(
                    "La nota {} está fuera del rango 0-100",
                    nota
                )));
            }
        }
        Ok(self)
    }
}

/// Matrícula con su grupo, curso y ciclo. Las partes que no se pudieron
/// resolver quedan en `None`; la matrícula nunca se descarta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculaConDetalles {
    pub matricula: Matricula,
    pub grupo: Option<Grupo>,
    pub curso: Option<Curso>,
    pub ciclo: Option<Ciclo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatriculaConAlumno {
    pub matricula: Matricula,
    pub alumno: Option<Alumno>,
}

// --- Filas planas de los LEFT JOIN ---

/// matriculas m LEFT JOIN grupos g LEFT JOIN cursos c LEFT JOIN ciclos ci
#[derive(Debug, FromRow)]
pub struct FilaMatriculaDetalle {
    pub id: i64,
    pub alumno_id: i64,
    pub grupo_id: i64,
    pub nota: Option<i64>,
    pub g_id: Option<i64>,
    pub g_anio: Option<i64>,
    pub g_numero_ciclo: Option<String>,
    pub g_codigo_curso: Option<String>,
    pub g_numero_grupo: Option<i64>,
    pub g_horario: Option<String>,
    pub g_cedula_profesor: Option<String>,
    pub c_id: Option<i64>,
    pub c_codigo: Option<String>,
    pub c_nombre: Option<String>,
    pub c_creditos: Option<i64>,
    pub c_horas_semanales: Option<i64>,
    pub ci_id: Option<i64>,
    pub ci_anio: Option<i64>,
    pub ci_numero: Option<String>,
    pub ci_fecha_inicio: Option<NaiveDate>,
    pub ci_fecha_fin: Option<NaiveDate>,
    pub ci_activo: Option<bool>,
}

impl FilaMatriculaDetalle {
    fn grupo(&self) -> Option<Grupo> {
        Some(Grupo {
            id: self.g_id?,
            anio: self.g_anio?,
            numero_ciclo: self.g_numero_ciclo.clone()?,
            codigo_curso: self.g_codigo_curso.clone()?,
            numero_grupo: self.g_numero_grupo?,
            horario: self.g_horario.clone(),
            cedula_profesor: self.g_cedula_profesor.clone(),
        })
    }

    fn curso(&self) -> Option<Curso> {
        Some(Curso {
            id: self.c_id?,
            codigo: self.c_codigo.clone()?,
            nombre: self.c_nombre.clone()?,
            creditos: self.c_creditos?,
            horas_semanales: self.c_horas_semanales?,
        })
    }

    fn ciclo(&self) -> Option<Ciclo> {
        Some(Ciclo {
            id: self.ci_id?,
            anio: self.ci_anio?,
            numero: self.ci_numero.clone()?,
            fecha_inicio: self.ci_fecha_inicio,
            fecha_fin: self.ci_fecha_fin,
            activo: self.ci_activo?,
        })
    }
}

impl From<FilaMatriculaDetalle> for MatriculaConDetalles {
    fn from(fila: FilaMatriculaDetalle) -> Self {
        let grupo = fila.grupo();
        let curso = fila.curso();
        let ciclo = fila.ciclo();
        MatriculaConDetalles {
            matricula: Matricula {
                id: fila.id,
                alumno_id: fila.alumno_id,
                grupo_id: fila.grupo_id,
                nota: fila.nota,
            },
            grupo,
            curso,
            ciclo,
        }
    }
}

/// matriculas m LEFT JOIN alumnos a
#[derive(Debug, FromRow)]
pub struct FilaMatriculaAlumno {
    pub id: i64,
    pub alumno_id: i64,
    pub grupo_id: i64,
    pub nota: Option<i64>,
    pub a_id: Option<i64>,
    pub a_cedula: Option<String>,
    pub a_nombre: Option<String>,
    pub a_telefono: Option<String>,
    pub a_email: Option<String>,
    pub a_fecha_nacimiento: Option<NaiveDate>,
    pub a_codigo_carrera: Option<String>,
}

impl From<FilaMatriculaAlumno> for MatriculaConAlumno {
    fn from(fila: FilaMatriculaAlumno) -> Self {
        let alumno = (|| {
            Some(Alumno {
                id: fila.a_id?,
                cedula: fila.a_cedula.clone()?,
                nombre: fila.a_nombre.clone()?,
                telefono: fila.a_telefono.clone(),
                email: fila.a_email.clone()?,
                fecha_nacimiento: fila.a_fecha_nacimiento?,
                codigo_carrera: fila.a_codigo_carrera.clone(),
            })
        })();
        MatriculaConAlumno {
            matricula: Matricula {
                id: fila.id,
                alumno_id: fila.alumno_id,
                grupo_id: fila.grupo_id,
                nota: fila.nota,
            },
            alumno,
        }
    }
}

// --- Resumen académico ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumenAcademico {
    pub matriculados: i64,
    pub completados: i64,
    pub creditos_aprobados: i64,
    pub promedio: f64,
}

/// Calcula el resumen a partir de pares (créditos, nota).
/// El promedio pondera cada nota por los créditos del curso y se redondea
/// a dos decimales; sin notas (o sin créditos) el promedio es 0.
pub fn calcular_resumen(items: &[(i64, Option<i64>)]) -> ResumenAcademico {
    let calificados: Vec<(i64, i64)> = items
        .iter()
        .filter_map(|(creditos, nota)| nota.map(|n| (*creditos, n)))
        .collect();

    let creditos: i64 = calificados.iter().map(|(c, _)| c).sum();
    let ponderado: i64 = calificados.iter().map(|(c, n)| c * n).sum();

    let promedio = if creditos > 0 {
        let bruto = ponderado as f64 / creditos as f64;
        (bruto * 100.0).round() / 100.0
    } else {
        0.0
    };

    ResumenAcademico {
        matriculados: items.len() as i64,
        completados: calificados.len() as i64,
        creditos_aprobados: creditos,
        promedio,
    }
}
