//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use crate::config::environment::EnvironmentConfig;
use crate::repositories::vehicle_repository::VehicleStore;

#[derive(Clone)]
pub struct AppState {
    pub store: VehicleStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: VehicleStore, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
