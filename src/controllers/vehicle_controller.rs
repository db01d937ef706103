use crate::dto::vehicle_dto::VehicleQuery;
use crate::models::vehicle::{VehiclePage, VehicleRecord};
use crate::repositories::vehicle_repository::VehicleStore;
use crate::services::vehicle_query_service;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    store: VehicleStore,
    page_size: usize,
}

impl VehicleController {
    pub fn new(store: VehicleStore, page_size: usize) -> Self {
        Self { store, page_size }
    }

    pub fn list(&self, query: &VehicleQuery) -> VehiclePage {
        let criteria = Some(&query.filters).filter(|f| !f.is_empty());
        vehicle_query_service::query(
            self.store.all(),
            criteria,
            query.sort,
            query.page,
            self.page_size,
        )
    }

    /// Buscar un vehículo por el id de la ruta; un id no numérico es un 404
    pub fn get_by_id(&self, id: &str) -> Result<VehicleRecord, AppError> {
        id.trim()
            .parse::<u64>()
            .ok()
            .and_then(|id| self.store.find_by_id(id))
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle", id))
    }
}
