//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del catálogo de vehículos
//! eléctricos, compartidos por el servidor y el cliente.

pub mod vehicle;

pub use vehicle::*;
