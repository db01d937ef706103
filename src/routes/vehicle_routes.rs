use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::debug;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{VehicleQuery, VehicleQueryParams};
use crate::models::vehicle::{VehiclePage, VehicleRecord};
use crate::state::AppState;
use crate::utils::errors::{query_rejection_error, AppError};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    params: Result<Query<VehicleQueryParams>, QueryRejection>,
) -> Result<Json<VehiclePage>, AppError> {
    let Query(params) = params.map_err(query_rejection_error)?;
    let query = VehicleQuery::try_from(params)?;
    debug!("📋 Listado de vehículos: {:?}", query);

    let controller = VehicleController::new(state.store.clone(), state.config.page_size);
    Ok(Json(controller.list(&query)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleRecord>, AppError> {
    let controller = VehicleController::new(state.store.clone(), state.config.page_size);
    let vehicle = controller.get_by_id(&id)?;
    Ok(Json(vehicle))
}
