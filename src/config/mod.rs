//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del servidor, la del cliente HTTP
//! y la lectura de variables de entorno.

pub mod client;
pub mod environment;

pub use client::*;
pub use environment::*;
