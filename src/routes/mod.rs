//! Rutas HTTP
//!
//! Este módulo arma el router completo de la aplicación.

pub mod vehicle_routes;

use axum::{extract::State, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::dto::vehicle_dto::HealthResponse;
use crate::middleware::catch_panic::catch_panic_middleware;
use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/health", get(health))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(catch_panic_middleware())
                .layer(cors),
        )
        .with_state(state)
}

/// Endpoint de salud
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "ev-marketplace".to_string(),
        vehicles: state.store.len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
