//! Middleware del sistema
//!
//! Este módulo contiene el middleware HTTP compartido por las rutas.

pub mod catch_panic;
pub mod cors;

pub use catch_panic::*;
pub use cors::*;
