//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el motor de
//! consulta del catálogo, el constructor de query strings y la coordinación
//! de peticiones del lado cliente.

pub mod listing_orchestrator;
pub mod query_builder;
pub mod vehicle_detail_service;
pub mod vehicle_query_service;

pub use listing_orchestrator::{ListingOrchestrator, ListingSelection, ListingView};
pub use vehicle_detail_service::{DetailView, VehicleDetailLoader};
pub use vehicle_query_service::{query, DEFAULT_PAGE_SIZE};
