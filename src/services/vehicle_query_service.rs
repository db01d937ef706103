//! Motor de consulta del catálogo
//!
//! Filtra, ordena y pagina la colección completa de vehículos. Todo es
//! síncrono, sin efectos secundarios y determinista: la misma entrada produce
//! siempre la misma página.

use std::cmp::Ordering;

use crate::models::vehicle::{SortKey, VehicleFilters, VehiclePage, VehicleRecord};

/// Tamaño de página por defecto del listado
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Ejecutar una consulta completa: filtro → orden → paginación
///
/// Las páginas fuera de rango devuelven `data` vacío con metadatos correctos.
/// `page` se trata como mínimo 1 y `page_size` como mínimo 1.
pub fn query(
    records: &[VehicleRecord],
    criteria: Option<&VehicleFilters>,
    sort: Option<SortKey>,
    page: u32,
    page_size: usize,
) -> VehiclePage {
    let mut matching = filter_vehicles(records, criteria);
    sort_vehicles(&mut matching, sort);
    paginate(&matching, page, page_size)
}

/// Etapa de filtro: conjunción de todos los criterios presentes
pub fn filter_vehicles<'a>(
    records: &'a [VehicleRecord],
    criteria: Option<&VehicleFilters>,
) -> Vec<&'a VehicleRecord> {
    match criteria {
        Some(criteria) => {
            let search = criteria
                .search
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase);

            records
                .iter()
                .filter(|v| matches_filters(v, criteria, search.as_deref()))
                .collect()
        }
        None => records.iter().collect(),
    }
}

fn matches_filters(
    vehicle: &VehicleRecord,
    criteria: &VehicleFilters,
    search: Option<&str>,
) -> bool {
    if let Some(range) = criteria.price_range {
        if !range.contains(vehicle.price) {
            return false;
        }
    }

    if let Some(year) = criteria.year {
        if vehicle.year != year {
            return false;
        }
    }

    if let Some(conditions) = criteria.condition.as_ref().filter(|c| !c.is_empty()) {
        if !conditions.contains(&vehicle.condition) {
            return false;
        }
    }

    if let Some(drivetrains) = criteria.drivetrain.as_ref().filter(|d| !d.is_empty()) {
        if !drivetrains.contains(&vehicle.drivetrain) {
            return false;
        }
    }

    if let Some(range) = criteria.range {
        if !range.contains(vehicle.range_km) {
            return false;
        }
    }

    if let Some(autopilot) = criteria.autopilot {
        if vehicle.autopilot != autopilot {
            return false;
        }
    }

    if criteria.no_accidents == Some(true) && vehicle.accidents {
        return false;
    }

    if let Some(term) = search {
        if !vehicle.brand.to_lowercase().contains(term)
            && !vehicle.model.to_lowercase().contains(term)
        {
            return false;
        }
    }

    true
}

/// Etapa de orden: estable, sin clave secundaria de desempate
pub fn sort_vehicles(vehicles: &mut [&VehicleRecord], sort: Option<SortKey>) {
    let Some(key) = sort else {
        return;
    };

    vehicles.sort_by(|a, b| compare(a, b, key));
}

fn compare(a: &VehicleRecord, b: &VehicleRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::PriceAsc => a.price.total_cmp(&b.price),
        SortKey::PriceDesc => b.price.total_cmp(&a.price),
        SortKey::YearDesc => b.year.cmp(&a.year),
        SortKey::RangeDesc => b.range_km.total_cmp(&a.range_km),
    }
}

/// Número de la última página: `ceil(total / page_size)`, mínimo 1
pub fn last_page(total: usize, page_size: usize) -> u32 {
    let page_size = page_size.max(1);
    let pages = total.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Etapa de paginación
pub fn paginate(vehicles: &[&VehicleRecord], page: u32, page_size: usize) -> VehiclePage {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total = vehicles.len();

    let start = (page as usize - 1).saturating_mul(page_size);
    let data = if start >= total {
        Vec::new()
    } else {
        let end = start.saturating_add(page_size).min(total);
        vehicles[start..end].iter().map(|v| (*v).clone()).collect()
    };

    VehiclePage {
        data,
        total,
        per_page: page_size,
        current_page: page,
        last_page: last_page(total, page_size),
    }
}
