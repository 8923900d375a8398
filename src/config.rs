// src/config.rs
use std::net::SocketAddr;
use thiserror::Error;

/// Errores de configuración (variables de ambiente).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Variable de ambiente requerida no definida: {0}")]
    MissingEnvVar(String),

    #[error("Valor inválido para {name}: '{value}'")]
    InvalidValue { name: String, value: String },
}

/// Configuración de la aplicación leída del ambiente (y de `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    pub bcrypt_cost: u32,
    pub seed_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = get_env_var("DATABASE_URL")?;

        let bind_addr = parse_var("BIND_ADDR", "0.0.0.0:3000")?;
        let db_max_connections: u32 = parse_var("DB_MAX_CONNECTIONS", "5")?;
        let bcrypt_cost: u32 = parse_var("BCRYPT_COST", &bcrypt::DEFAULT_COST.to_string())?;
        // bcrypt sólo acepta costos entre 4 y 31
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                name: "BCRYPT_COST".into(),
                value: bcrypt_cost.to_string(),
            });
        }

        let seed_data = std::env::var("SEED_DATA")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            bind_addr,
            db_max_connections,
            bcrypt_cost,
            seed_data,
        })
    }
}

/// Lee una variable de ambiente obligatoria.
pub fn get_env_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_var<T: std::str::FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let raw = std::env::var(name).unwrap_or_else(|_| default.to_string());
    raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
        name: name.to_string(),
        value: raw,
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on" | "si" | "sí"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_aceptan_variantes_comunes() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("sí"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("no"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn variable_faltante_reporta_su_nombre() {
        let err = get_env_var("GESTION_ACADEMICA_VARIABLE_QUE_NO_EXISTE").unwrap_err();
        assert!(err.to_string().contains("GESTION_ACADEMICA_VARIABLE_QUE_NO_EXISTE"));
    }
}
