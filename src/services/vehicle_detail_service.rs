//! Cargador del detalle de un vehículo
//!
//! Guarda el vehículo cargado, el indicador de carga y el último error.
//! Un fallo conserva el vehículo mostrado anteriormente.

use std::sync::Arc;

use tracing::warn;

use crate::client::VehicleSource;
use crate::models::vehicle::VehicleRecord;

/// Estado visible del detalle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailView {
    pub vehicle: Option<VehicleRecord>,
    pub is_loading: bool,
    pub error: Option<String>,
}

pub struct VehicleDetailLoader {
    source: Arc<dyn VehicleSource>,
    view: DetailView,
}

impl VehicleDetailLoader {
    pub fn new(source: Arc<dyn VehicleSource>) -> Self {
        Self {
            source,
            view: DetailView::default(),
        }
    }

    /// Cargar un vehículo por id desde el identificador de la ruta
    ///
    /// Un id no numérico se informa como vehículo no encontrado.
    pub async fn load_param(&mut self, id: &str) -> &DetailView {
        match id.trim().parse::<u64>() {
            Ok(id) => self.load(id).await,
            Err(_) => {
                self.view.is_loading = false;
                self.view.error = Some(format!("Vehicle {} not found", id));
                &self.view
            }
        }
    }

    pub async fn load(&mut self, id: u64) -> &DetailView {
        self.view.is_loading = true;
        self.view.error = None;

        match self.source.fetch_vehicle(id).await {
            Ok(vehicle) => self.view.vehicle = Some(vehicle),
            Err(e) => {
                warn!("❌ Error cargando vehículo {}: {}", id, e);
                self.view.error = Some(e.to_string());
            }
        }

        self.view.is_loading = false;
        &self.view
    }

    pub fn view(&self) -> &DetailView {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::models::vehicle::{Condition, Drivetrain, SortKey, VehicleFilters, VehiclePage};
    use async_trait::async_trait;

    struct SingleVehicle;

    #[async_trait]
    impl VehicleSource for SingleVehicle {
        async fn fetch_page(
            &self,
            _criteria: Option<&VehicleFilters>,
            _sort: Option<SortKey>,
            _page: u32,
        ) -> Result<VehiclePage, ClientError> {
            Err(ClientError::Status(501))
        }

        async fn fetch_vehicle(&self, id: u64) -> Result<VehicleRecord, ClientError> {
            match id {
                1 => Ok(VehicleRecord {
                    id: 1,
                    brand: "Hyundai".to_string(),
                    model: "Ioniq 5".to_string(),
                    year: 2023,
                    price: 52_000.0,
                    range_km: 480.0,
                    color: "Gravity Gold".to_string(),
                    condition: Condition::New,
                    battery_capacity_kwh: 77.4,
                    charging_speed_kw: 235.0,
                    seats: 5,
                    drivetrain: Drivetrain::Rwd,
                    location: "Seoul".to_string(),
                    autopilot: false,
                    kilometer_count: 0,
                    accidents: false,
                    accident_description: None,
                    images: vec!["/images/ioniq5.jpg".to_string()],
                }),
                500 => Err(ClientError::Status(500)),
                other => Err(ClientError::NotFound(other)),
            }
        }
    }

    #[tokio::test]
    async fn test_load_success() {
        let mut loader = VehicleDetailLoader::new(Arc::new(SingleVehicle));
        let view = loader.load(1).await;
        assert!(!view.is_loading);
        assert!(view.error.is_none());
        assert_eq!(view.vehicle.as_ref().map(|v| v.model.as_str()), Some("Ioniq 5"));
    }

    #[tokio::test]
    async fn test_not_found_keeps_previous_vehicle() {
        let mut loader = VehicleDetailLoader::new(Arc::new(SingleVehicle));
        loader.load(1).await;

        let view = loader.load(999).await;
        assert_eq!(view.error.as_deref(), Some("Vehicle 999 not found"));
        assert_eq!(view.vehicle.as_ref().map(|v| v.id), Some(1));
        assert!(!view.is_loading);
    }

    #[tokio::test]
    async fn test_status_error_and_non_numeric_id() {
        let mut loader = VehicleDetailLoader::new(Arc::new(SingleVehicle));
        let view = loader.load(500).await;
        assert_eq!(view.error.as_deref(), Some("HTTP error! status: 500"));

        let view = loader.load_param("abc").await;
        assert_eq!(view.error.as_deref(), Some("Vehicle abc not found"));
        assert!(view.vehicle.is_none());
    }
}
