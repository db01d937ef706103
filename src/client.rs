//! Cliente HTTP del catálogo de vehículos
//!
//! Este módulo contiene el cliente HTTP que consume `GET /vehicles` y
//! `GET /vehicles/{id}`, y el trait `VehicleSource` que usan el orquestador
//! del listado y el cargador de detalle.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, error};

use crate::config::client::ClientConfig;
use crate::models::vehicle::{SortKey, VehicleFilters, VehiclePage, VehicleRecord};
use crate::services::query_builder;

/// Errores del lado cliente
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Vehicle {0} not found")]
    NotFound(u64),

    #[error("Invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
}

// Un cuerpo que no se puede leer como JSON no es un fallo de red
fn body_error(e: reqwest::Error) -> ClientError {
    if e.is_decode() {
        ClientError::Decode(e)
    } else {
        ClientError::Network(e)
    }
}

/// Origen de datos del catálogo visto desde el cliente
#[async_trait]
pub trait VehicleSource: Send + Sync {
    async fn fetch_page(
        &self,
        criteria: Option<&VehicleFilters>,
        sort: Option<SortKey>,
        page: u32,
    ) -> Result<VehiclePage, ClientError>;

    async fn fetch_vehicle(&self, id: u64) -> Result<VehicleRecord, ClientError>;
}

/// Cliente HTTP para la API de vehículos
#[derive(Debug, Clone)]
pub struct VehicleApiClient {
    client: Client,
    base_url: String,
}

impl VehicleApiClient {
    /// Crear nuevo cliente HTTP con la URL base y el timeout configurados
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl VehicleSource for VehicleApiClient {
    async fn fetch_page(
        &self,
        criteria: Option<&VehicleFilters>,
        sort: Option<SortKey>,
        page: u32,
    ) -> Result<VehiclePage, ClientError> {
        let url = format!("{}/vehicles", self.base_url);
        let params = query_builder::to_params(criteria, sort, page);
        debug!("🔍 GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch vehicles: {}", e);
                ClientError::Network(e)
            })?;

        if !response.status().is_success() {
            error!("❌ Failed to fetch vehicles: status {}", response.status());
            return Err(ClientError::Status(response.status().as_u16()));
        }

        response.json::<VehiclePage>().await.map_err(body_error)
    }

    async fn fetch_vehicle(&self, id: u64) -> Result<VehicleRecord, ClientError> {
        let url = format!("{}/vehicles/{}", self.base_url, id);
        debug!("🔍 GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("❌ Failed to fetch vehicle with id {}: {}", id, e);
            ClientError::Network(e)
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(id)),
            status if !status.is_success() => {
                error!("❌ Failed to fetch vehicle with id {}: status {}", id, status);
                Err(ClientError::Status(status.as_u16()))
            }
            _ => response.json::<VehicleRecord>().await.map_err(body_error),
        }
    }
}
