//! Configuración del cliente HTTP del catálogo

use std::env;
use std::time::Duration;

use super::environment::{parse_var, ConfigError};

/// Configuración del cliente y del orquestador del listado
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Ventana de quietud antes de lanzar una petición
    pub debounce: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(30),
            debounce: Duration::from_millis(100),
        }
    }
}

impl ClientConfig {
    /// Leer la configuración del cliente desde las variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración con una función de búsqueda arbitraria
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            base_url: lookup("VEHICLE_API_URL").unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(parse_var(
                &lookup,
                "VEHICLE_API_TIMEOUT_SECS",
                "number of seconds",
                defaults.timeout.as_secs(),
            )?),
            debounce: Duration::from_millis(parse_var(
                &lookup,
                "VEHICLE_API_DEBOUNCE_MS",
                "number of milliseconds",
                defaults.debounce.as_millis() as u64,
            )?),
        })
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
