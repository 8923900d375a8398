// src/presentacion/recurso.rs
use axum::http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Resultado de una llamada a la API tal como lo ve una pantalla.
#[derive(Debug, Clone, PartialEq)]
pub enum Recurso<T> {
    Cargando,
    Exito(T),
    Error(ErrorCliente),
}

impl<T> Recurso<T> {
    pub fn desde_resultado(resultado: Result<T, ErrorCliente>) -> Self {
        match resultado {
            Ok(datos) => Recurso::Exito(datos),
            Err(error) => Recurso::Error(error),
        }
    }

    pub fn esta_cargando(&self) -> bool {
        matches!(self, Recurso::Cargando)
    }

    pub fn datos(&self) -> Option<&T> {
        match self {
            Recurso::Exito(datos) => Some(datos),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorCliente> {
        match self {
            Recurso::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Recurso<U> {
        match self {
            Recurso::Cargando => Recurso::Cargando,
            Recurso::Exito(datos) => Recurso::Exito(f(datos)),
            Recurso::Error(error) => Recurso::Error(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoError {
    NoAutorizado,
    Conectividad,
    NoEncontrado,
    Conflicto,
    Validacion,
    Servidor,
}

impl TipoError {
    /// Traduce el campo `kind` del sobre de error.
    pub fn desde_kind(kind: &str) -> Option<Self> {
        match kind {
            "unauthorized" => Some(TipoError::NoAutorizado),
            "not_found" => Some(TipoError::NoEncontrado),
            "conflict" => Some(TipoError::Conflicto),
            "validation" => Some(TipoError::Validacion),
            "internal" => Some(TipoError::Servidor),
            _ => None,
        }
    }

    pub fn desde_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TipoError::NoAutorizado,
            StatusCode::NOT_FOUND => TipoError::NoEncontrado,
            StatusCode::CONFLICT => TipoError::Conflicto,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => TipoError::Validacion,
            _ => TipoError::Servidor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{mensaje}")]
pub struct ErrorCliente {
    pub tipo: TipoError,
    pub mensaje: String,
}

#[derive(Deserialize)]
struct SobreError {
    error: String,
    kind: Option<String>,
}

impl ErrorCliente {
    pub fn new(tipo: TipoError, mensaje: impl Into<String>) -> Self {
        Self {
            tipo,
            mensaje: mensaje.into(),
        }
    }

    /// Construye el error a partir de una respuesta HTTP fallida. Si el cuerpo
    /// es el sobre `{error, kind}` se usa su etiqueta; si no, el código HTTP.
    pub fn desde_respuesta(status: StatusCode, cuerpo: &str) -> Self {
        match serde_json::from_str::<SobreError>(cuerpo) {
            Ok(sobre) => {
                let tipo = sobre
                    .kind
                    .as_deref()
                    .and_then(TipoError::desde_kind)
                    .unwrap_or_else(|| TipoError::desde_status(status));
                Self::new(tipo, sobre.error)
            }
            Err(_) => {
                let mensaje = match cuerpo.trim() {
                    "" => status.canonical_reason().unwrap_or("Error").to_string(),
                    texto => texto.to_string(),
                };
                Self::new(TipoError::desde_status(status), mensaje)
            }
        }
    }

    /// Falla de transporte: no hubo respuesta del servidor.
    pub fn conectividad(detalle: impl Into<String>) -> Self {
        Self::new(TipoError::Conectividad, detalle)
    }

    pub fn mensaje_amigable(&self) -> String {
        match self.tipo {
            TipoError::NoAutorizado => "Cédula o clave incorrectas.".to_string(),
            TipoError::Conectividad => {
                "No se pudo conectar con el servidor. Verifique su conexión e intente de nuevo."
                    .to_string()
            }
            TipoError::Servidor => "Ocurrió un error en el servidor. Intente más tarde.".to_string(),
            TipoError::NoEncontrado | TipoError::Conflicto | TipoError::Validacion => {
                self.mensaje.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usa_la_etiqueta_del_sobre() {
        let err = ErrorCliente::desde_respuesta(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Cédula o clave inválidas.","kind":"unauthorized"}"#,
        );
        assert_eq!(err.tipo, TipoError::NoAutorizado);
        assert_eq!(err.mensaje, "Cédula o clave inválidas.");
    }

    #[test]
    fn cuerpo_de_texto_se_clasifica_por_status() {
        let err = ErrorCliente::desde_respuesta(StatusCode::CONFLICT, "duplicado");
        assert_eq!(err.tipo, TipoError::Conflicto);
        assert_eq!(err.mensaje, "duplicado");

        let vacio = ErrorCliente::desde_respuesta(StatusCode::NOT_FOUND, "");
        assert_eq!(vacio.tipo, TipoError::NoEncontrado);
        assert_eq!(vacio.mensaje, "Not Found");
    }

    #[test]
    fn no_autorizado_se_distingue_de_conectividad() {
        let credenciales = ErrorCliente::desde_respuesta(StatusCode::UNAUTHORIZED, "");
        let red = ErrorCliente::conectividad("connection refused");
        assert_ne!(credenciales.tipo, red.tipo);
        assert_ne!(credenciales.mensaje_amigable(), red.mensaje_amigable());
    }

    #[test]
    fn recurso_desde_resultado() {
        let ok: Recurso<i32> = Recurso::desde_resultado(Ok(3));
        assert_eq!(ok.datos(), Some(&3));
        assert_eq!(ok.map(|n| n * 2), Recurso::Exito(6));

        let err: Recurso<i32> = Recurso::desde_resultado(Err(ErrorCliente::conectividad("timeout")));
        assert!(err.datos().is_none());
        assert_eq!(err.error().map(|e| e.tipo), Some(TipoError::Conectividad));
        assert!(Recurso::<i32>::Cargando.esta_cargando());
    }
}
