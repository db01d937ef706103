//! Repositorios de datos
//!
//! Acceso a la colección estática de vehículos cargada desde JSON.

pub mod vehicle_repository;

pub use vehicle_repository::{StoreError, VehicleStore};
