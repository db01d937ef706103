//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores compartido por el servidor.

pub mod errors;

pub use errors::{AppError, AppResult};
