//! Orquestador del listado de vehículos
//!
//! Mantiene la selección actual (filtros, orden, página), espera una ventana
//! de quietud antes de pedir datos y publica el estado visible a través de un
//! canal `watch`. Sólo la respuesta de la última petición despachada puede
//! actualizar lo que se muestra.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info, warn};

use crate::client::VehicleSource;
use crate::config::client::ClientConfig;
use crate::models::vehicle::{SortKey, VehicleFilters, VehicleRecord};

/// Selección del usuario
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSelection {
    pub filters: Option<VehicleFilters>,
    pub sort: Option<SortKey>,
    pub page: u32,
}

impl Default for ListingSelection {
    fn default() -> Self {
        Self {
            filters: None,
            sort: None,
            page: 1,
        }
    }
}

/// Estado visible del listado
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub vehicles: Vec<VehicleRecord>,
    pub total: usize,
    pub total_pages: u32,
    pub current_page: u32,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for ListingView {
    fn default() -> Self {
        Self {
            vehicles: Vec::new(),
            total: 0,
            total_pages: 1,
            current_page: 1,
            is_loading: false,
            error: None,
        }
    }
}

// Petición en curso, compartida entre el bucle y `Drop`
#[derive(Default)]
struct FetchSlot {
    current: Option<AbortHandle>,
    closed: bool,
}

impl FetchSlot {
    fn replace(&mut self, next: Option<AbortHandle>) {
        if let Some(previous) = std::mem::replace(&mut self.current, next) {
            previous.abort();
        }
    }
}

type SharedSlot = Arc<Mutex<FetchSlot>>;

fn lock(slot: &SharedSlot) -> MutexGuard<'_, FetchSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Orquestador de peticiones del listado
pub struct ListingOrchestrator {
    selection: watch::Sender<ListingSelection>,
    view: watch::Receiver<ListingView>,
    worker: JoinHandle<()>,
    in_flight: SharedSlot,
}

impl ListingOrchestrator {
    /// Arrancar el orquestador; la primera petición sale tras la ventana de quietud
    pub fn spawn(source: Arc<dyn VehicleSource>, debounce: Duration) -> Self {
        let (selection_tx, selection_rx) = watch::channel(ListingSelection::default());
        let (view_tx, view_rx) = watch::channel(ListingView::default());
        let in_flight = SharedSlot::default();

        let worker = tokio::spawn(run(
            source,
            debounce,
            selection_rx,
            Arc::new(view_tx),
            in_flight.clone(),
        ));

        Self {
            selection: selection_tx,
            view: view_rx,
            worker,
            in_flight,
        }
    }

    /// Arrancar con la ventana de quietud de la configuración del cliente
    pub fn from_config(source: Arc<dyn VehicleSource>, config: &ClientConfig) -> Self {
        Self::spawn(source, config.debounce)
    }

    /// Cambiar los filtros; vuelve a la página 1
    pub fn set_filters(&self, filters: Option<VehicleFilters>) {
        self.selection.send_if_modified(|s| {
            let changed = s.filters != filters || s.page != 1;
            s.filters = filters;
            s.page = 1;
            changed
        });
    }

    /// Quitar todos los filtros; vuelve a la página 1
    pub fn reset_filters(&self) {
        self.set_filters(None);
    }

    /// Cambiar el orden; vuelve a la página 1
    pub fn set_sort(&self, sort: Option<SortKey>) {
        self.selection.send_if_modified(|s| {
            let changed = s.sort != sort || s.page != 1;
            s.sort = sort;
            s.page = 1;
            changed
        });
    }

    /// Cambiar sólo la página; los filtros y el orden no se tocan
    pub fn set_page(&self, page: u32) {
        let page = page.max(1);
        self.selection.send_if_modified(|s| {
            let changed = s.page != page;
            s.page = page;
            changed
        });
    }

    pub fn selection(&self) -> ListingSelection {
        self.selection.borrow().clone()
    }

    pub fn view(&self) -> ListingView {
        self.view.borrow().clone()
    }

    /// Suscribirse a los cambios del estado visible
    pub fn subscribe(&self) -> watch::Receiver<ListingView> {
        self.view.clone()
    }
}

impl Drop for ListingOrchestrator {
    fn drop(&mut self) {
        {
            let mut slot = lock(&self.in_flight);
            slot.closed = true;
            slot.replace(None);
        }
        self.worker.abort();
    }
}

async fn run(
    source: Arc<dyn VehicleSource>,
    debounce: Duration,
    mut selection: watch::Receiver<ListingSelection>,
    view: Arc<watch::Sender<ListingView>>,
    in_flight: SharedSlot,
) {
    let sequence = Arc::new(AtomicU64::new(0));
    let mut first = true;

    loop {
        if !first && selection.changed().await.is_err() {
            break;
        }
        first = false;

        let Some(settled) = settle(&mut selection, debounce).await else {
            break;
        };

        let request_id = sequence.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "🔄 Petición #{} página {} orden {:?}",
            request_id, settled.page, settled.sort
        );

        {
            let mut slot = lock(&in_flight);
            if slot.closed {
                break;
            }

            view.send_modify(|v| {
                v.is_loading = true;
                v.error = None;
            });

            let handle = tokio::spawn(fetch(
                source.clone(),
                settled,
                request_id,
                sequence.clone(),
                view.clone(),
            ));
            // la petición anterior queda obsoleta
            slot.replace(Some(handle.abort_handle()));
        }
    }

    lock(&in_flight).replace(None);
    info!("👋 Orquestador del listado detenido");
}

// Esperar a que la selección quede quieta durante `window`; cada cambio reinicia el temporizador
async fn settle(
    selection: &mut watch::Receiver<ListingSelection>,
    window: Duration,
) -> Option<ListingSelection> {
    loop {
        let quiet = tokio::select! {
            _ = tokio::time::sleep(window) => true,
            changed = selection.changed() => {
                if changed.is_err() {
                    return None;
                }
                false
            }
        };

        if quiet {
            return Some(selection.borrow_and_update().clone());
        }
    }
}

async fn fetch(
    source: Arc<dyn VehicleSource>,
    selection: ListingSelection,
    request_id: u64,
    sequence: Arc<AtomicU64>,
    view: Arc<watch::Sender<ListingView>>,
) {
    let result = source
        .fetch_page(selection.filters.as_ref(), selection.sort, selection.page)
        .await;

    view.send_if_modified(|v| {
        if sequence.load(Ordering::SeqCst) != request_id {
            debug!("⏭️ Respuesta #{} descartada", request_id);
            return false;
        }

        match result {
            Ok(page) => {
                v.vehicles = page.data;
                v.total = page.total;
                v.total_pages = page.last_page;
                v.current_page = page.current_page;
                v.error = None;
            }
            Err(e) => {
                warn!("❌ Error cargando vehículos: {}", e);
                v.error = Some(e.to_string());
            }
        }
        v.is_loading = false;
        true
    });
}
