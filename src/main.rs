use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use ev_marketplace::config::environment::EnvironmentConfig;
use ev_marketplace::repositories::vehicle_repository::VehicleStore;
use ev_marketplace::routes::create_app;
use ev_marketplace::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    // En desarrollo se muestra el módulo de origen de cada evento
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(config.is_development())
        .init();

    info!("🚗 EV Marketplace - API del catálogo");
    info!("====================================");

    // Cargar la colección de vehículos una sola vez
    let store = match VehicleStore::load(&config.data_path).await {
        Ok(store) => store,
        Err(e) => {
            error!("❌ Error cargando los datos de vehículos: {}", e);
            return Err(anyhow::anyhow!("Error de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_addr().parse()?;
    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Estado del servicio");
    info!("   GET  /vehicles - Listado con filtros, orden y paginación");
    info!("   GET  /vehicles/:id - Detalle de un vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
