//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del servidor a partir del entorno
//! (y de un `.env` opcional cargado con dotenvy en `main`).

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::services::vehicle_query_service::DEFAULT_PAGE_SIZE;

/// Errores de configuración
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub data_path: String,
    pub page_size: usize,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            data_path: "data/vehicle_data.json".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno; las variables ausentes toman el valor por defecto
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let page_size = parse_var(&lookup, "PAGE_SIZE", "positive number", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PAGE_SIZE",
                value: "0".to_string(),
                expected: "positive number",
            });
        }

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var(&lookup, "PORT", "port number", defaults.port)?,
            host: lookup("HOST").unwrap_or(defaults.host),
            data_path: lookup("VEHICLE_DATA_PATH").unwrap_or(defaults.data_path),
            page_size,
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            log_level: parse_var(&lookup, "LOG_LEVEL", "log level", defaults.log_level)?,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección de escucha del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value, expected }),
        None => Ok(default),
    }
}
