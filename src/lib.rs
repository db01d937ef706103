//! Catálogo de vehículos eléctricos
//!
//! Servidor HTTP del catálogo (filtro, orden y paginación sobre una colección
//! estática) y cliente con orquestación de peticiones para el listado.

pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
