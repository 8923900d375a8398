// src/models/mod.rs
pub mod alumno;
pub mod carrera;
pub mod carrera_curso;
pub mod ciclo;
pub mod curso;
pub mod grupo;
pub mod matricula;
pub mod profesor;
pub mod usuario;

use crate::error::{AppError, AppResult};
use chrono::NaiveDate;

// --- Validaciones compartidas por los payloads ---

/// Texto obligatorio: se recorta y no puede quedar vacío.
pub(crate) fn requerido(campo: &str, valor: String) -> AppResult<String> {
    let valor = valor.trim().to_string();
    if valor.is_empty() {
        return Err(AppError::Validation(format!(
            "El campo '{}' es obligatorio",
            campo
        )));
    }
    Ok(valor)
}

/// Texto opcional: un valor en blanco se guarda como NULL.
pub(crate) fn opcional(valor: Option<String>) -> Option<String> {
    valor
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn fecha(campo: &str, valor: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(valor, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "El campo '{}' debe tener el formato AAAA-MM-DD",
            campo
        ))
    })
}

pub(crate) fn no_negativo(campo: &str, valor: i64) -> AppResult<i64> {
    if valor < 0 {
        return Err(AppError::Validation(format!(
            "El campo '{}' no puede ser negativo",
            campo
        )));
    }
    Ok(valor)
}

pub(crate) fn email(valor: String) -> AppResult<String> {
    let valor = requerido("email", valor)?;
    if !valor.contains('@') {
        return Err(AppError::Validation(format!(
            "El email '{}' no es válido",
            valor
        )));
    }
    Ok(valor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requerido_recorta_y_rechaza_blancos() {
        assert_eq!(requerido("nombre", "  Ana ".into()).unwrap(), "Ana");
        assert!(matches!(
            requerido("nombre", "   ".into()),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn opcional_en_blanco_queda_como_none() {
        assert_eq!(opcional(Some("  ".into())), None);
        assert_eq!(opcional(None), None);
        assert_eq!(opcional(Some(" 8888 ".into())), Some("8888".to_string()));
    }

    #[test]
    fn fechas_solo_en_formato_iso() {
        assert!(fecha("fechaNacimiento", "2001-02-28").is_ok());
        assert!(fecha("fechaNacimiento", "28/02/2001").is_err());
        assert!(fecha("fechaNacimiento", "2001-02-30").is_err());
    }
}
