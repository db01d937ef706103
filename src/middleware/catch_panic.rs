//! Conversión de pánicos de los handlers en respuestas 500

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use crate::utils::errors::AppError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Crear middleware que responde con `INTERNAL_ERROR` si un handler entra en pánico
pub fn catch_panic_middleware() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(panic_response as PanicHandler)
}

/// Respuesta JSON para un pánico capturado
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::Internal(detail).into_response()
}
