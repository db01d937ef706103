//! Constructor de query strings del listado
//!
//! Traduce filtros, orden y página a los parámetros que entiende
//! `GET /vehicles` y viceversa. Sólo se emiten los campos presentes;
//! `page` siempre se emite. La codificación es la de formularios
//! (`application/x-www-form-urlencoded`), la misma que usan reqwest y axum.

use axum::extract::Query;
use axum::http::Uri;
use reqwest::Url;

use crate::dto::vehicle_dto::{VehicleQuery, VehicleQueryParams};
use crate::models::vehicle::{SortKey, VehicleFilters};
use crate::utils::errors::{query_rejection_error, AppError, AppResult};

/// Parámetros de una petición de página, en orden de emisión
pub fn to_params(
    criteria: Option<&VehicleFilters>,
    sort: Option<SortKey>,
    page: u32,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("page", page.to_string())];

    if let Some(filters) = criteria {
        if let Some(range) = filters.price_range {
            params.push(("minPrice", range.min.to_string()));
            params.push(("maxPrice", range.max.to_string()));
        }

        if let Some(year) = filters.year {
            params.push(("year", year.to_string()));
        }

        if let Some(conditions) = filters.condition.as_ref().filter(|c| !c.is_empty()) {
            params.push(("condition", join(conditions.iter().map(|c| c.as_str()))));
        }

        if let Some(drivetrains) = filters.drivetrain.as_ref().filter(|d| !d.is_empty()) {
            params.push(("drivetrain", join(drivetrains.iter().map(|d| d.as_str()))));
        }

        if let Some(range) = filters.range {
            params.push(("minRange", range.min.to_string()));
            params.push(("maxRange", range.max.to_string()));
        }

        if let Some(autopilot) = filters.autopilot {
            params.push(("autopilot", autopilot.to_string()));
        }

        if let Some(no_accidents) = filters.no_accidents {
            params.push(("noAccidents", no_accidents.to_string()));
        }

        if let Some(search) = filters.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
    }

    if let Some(sort) = sort {
        params.push(("orderBy", sort.as_str().to_string()));
    }

    params
}

fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.collect::<Vec<_>>().join(",")
}

/// Codificar una petición de página como query string (sin `?`)
pub fn encode(criteria: Option<&VehicleFilters>, sort: Option<SortKey>, page: u32) -> String {
    let params = to_params(criteria, sort, page);
    // la base es fija; sólo interesa la parte de query
    match Url::parse_with_params("http://localhost/vehicles", &params) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => String::new(),
    }
}

/// Decodificar un query string (con o sin `?` inicial)
pub fn decode(query: &str) -> AppResult<VehicleQuery> {
    let uri: Uri = format!("/vehicles?{}", query.trim_start_matches('?'))
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Malformed query string '{}'", query)))?;
    let Query(params) =
        Query::<VehicleQueryParams>::try_from_uri(&uri).map_err(query_rejection_error)?;

    VehicleQuery::try_from(params)
}
