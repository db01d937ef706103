use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{SortKey, ValueRange, VehicleFilters};
use crate::utils::errors::{invalid_param_error, AppError};

// Parámetros del listado tal como llegan en el query string
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleQueryParams {
    pub page: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub year: Option<String>,
    pub condition: Option<String>,
    pub drivetrain: Option<String>,
    pub min_range: Option<String>,
    pub max_range: Option<String>,
    pub autopilot: Option<String>,
    pub no_accidents: Option<String>,
    pub search: Option<String>,
    pub order_by: Option<String>,
}

// Consulta del listado ya decodificada
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct VehicleQuery {
    pub filters: VehicleFilters,
    pub sort: Option<SortKey>,
    #[validate(range(min = 1))]
    pub page: u32,
}

impl Default for VehicleQuery {
    fn default() -> Self {
        Self {
            filters: VehicleFilters::default(),
            sort: None,
            page: 1,
        }
    }
}

impl TryFrom<VehicleQueryParams> for VehicleQuery {
    type Error = AppError;

    fn try_from(params: VehicleQueryParams) -> Result<Self, Self::Error> {
        let page = match present(&params.page) {
            Some(raw) => parse_number::<u32>("page", raw)?,
            None => 1,
        };

        let filters = VehicleFilters {
            price_range: parse_range(
                ("minPrice", &params.min_price),
                ("maxPrice", &params.max_price),
            )?,
            year: present(&params.year)
                .map(|raw| parse_number::<i32>("year", raw))
                .transpose()?,
            condition: parse_list("condition", &params.condition)?,
            drivetrain: parse_list("drivetrain", &params.drivetrain)?,
            range: parse_range(
                ("minRange", &params.min_range),
                ("maxRange", &params.max_range),
            )?,
            autopilot: present(&params.autopilot)
                .map(|raw| parse_bool("autopilot", raw))
                .transpose()?,
            no_accidents: present(&params.no_accidents)
                .map(|raw| parse_bool("noAccidents", raw))
                .transpose()?,
            search: params.search.clone().filter(|s| !s.is_empty()),
        };

        let query = VehicleQuery {
            filters,
            sort: present(&params.order_by).and_then(SortKey::from_param),
            page,
        };
        query.validate()?;
        Ok(query)
    }
}

// Un parámetro presente pero vacío cuenta como ausente
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, AppError> {
    raw.parse::<T>().map_err(|_| invalid_param_error(name, raw))
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(invalid_param_error(name, other)),
    }
}

fn parse_f64(name: &str, raw: &str) -> Result<f64, AppError> {
    let value = parse_number::<f64>(name, raw)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_param_error(name, raw))
    }
}

// Un rango sólo aplica cuando llegan ambos extremos
fn parse_range(
    min: (&str, &Option<String>),
    max: (&str, &Option<String>),
) -> Result<Option<ValueRange>, AppError> {
    match (present(min.1), present(max.1)) {
        (Some(lo), Some(hi)) => Ok(Some(ValueRange::new(
            parse_f64(min.0, lo)?,
            parse_f64(max.0, hi)?,
        ))),
        _ => Ok(None),
    }
}

fn parse_list<T>(name: &str, value: &Option<String>) -> Result<Option<Vec<T>>, AppError>
where
    T: std::str::FromStr,
{
    let Some(raw) = present(value) else {
        return Ok(None);
    };

    let items = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| item.parse::<T>().map_err(|_| invalid_param_error(name, item)))
        .collect::<Result<Vec<T>, AppError>>()?;

    Ok(if items.is_empty() { None } else { Some(items) })
}

// Respuesta del endpoint de salud
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub vehicles: usize,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::{Condition, Drivetrain};

    fn params(pairs: &[(&str, &str)]) -> VehicleQueryParams {
        let object: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(name, value)| (name.to_string(), serde_json::Value::from(*value)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(object)).unwrap()
    }

    #[test]
    fn test_wire_names() {
        let params = params(&[
            ("minPrice", "1"),
            ("noAccidents", "true"),
            ("orderBy", "price_asc"),
        ]);
        assert_eq!(params.min_price.as_deref(), Some("1"));
        assert_eq!(params.no_accidents.as_deref(), Some("true"));
        assert_eq!(params.order_by.as_deref(), Some("price_asc"));
    }

    #[test]
    fn test_defaults_when_empty() {
        let query = VehicleQuery::try_from(VehicleQueryParams::default()).unwrap();
        assert_eq!(query, VehicleQuery::default());
    }

    #[test]
    fn test_full_params() {
        let query = VehicleQuery::try_from(params(&[
            ("page", "2"),
            ("minPrice", "50000"),
            ("maxPrice", "100000"),
            ("year", "2023"),
            ("condition", "New,Used"),
            ("drivetrain", "AWD"),
            ("minRange", "400"),
            ("maxRange", "600"),
            ("autopilot", "false"),
            ("noAccidents", "true"),
            ("search", "tesla"),
            ("orderBy", "year_desc"),
        ]))
        .unwrap();

        assert_eq!(query.page, 2);
        assert_eq!(query.sort, Some(SortKey::YearDesc));
        assert_eq!(query.filters.price_range, Some(ValueRange::new(50_000.0, 100_000.0)));
        assert_eq!(query.filters.year, Some(2023));
        assert_eq!(query.filters.condition, Some(vec![Condition::New, Condition::Used]));
        assert_eq!(query.filters.drivetrain, Some(vec![Drivetrain::Awd]));
        assert_eq!(query.filters.range, Some(ValueRange::new(400.0, 600.0)));
        assert_eq!(query.filters.autopilot, Some(false));
        assert_eq!(query.filters.no_accidents, Some(true));
        assert_eq!(query.filters.search.as_deref(), Some("tesla"));
    }

    #[test]
    fn test_empty_values_are_absent() {
        let query = VehicleQuery::try_from(params(&[
            ("condition", ""),
            ("drivetrain", ","),
            ("year", ""),
            ("search", ""),
            ("autopilot", ""),
        ]))
        .unwrap();
        assert!(query.filters.is_empty());
        assert_eq!(query.filters, VehicleFilters::default());
    }

    #[test]
    fn test_half_range_is_ignored() {
        let query = VehicleQuery::try_from(params(&[("minPrice", "1000")])).unwrap();
        assert!(query.filters.price_range.is_none());
    }

    #[test]
    fn test_unknown_order_by_means_no_sort() {
        let query = VehicleQuery::try_from(params(&[("orderBy", "color_asc")])).unwrap();
        assert_eq!(query.sort, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        for pairs in [
            vec![("year", "abc")],
            vec![("condition", "Broken")],
            vec![("drivetrain", "4WD")],
            vec![("autopilot", "yes")],
            vec![("minPrice", "cheap"), ("maxPrice", "100")],
            vec![("page", "-1")],
        ] {
            let err = VehicleQuery::try_from(params(&pairs)).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(_)), "{:?}", pairs);
        }
    }

    #[test]
    fn test_page_zero_fails_validation() {
        let err = VehicleQuery::try_from(params(&[("page", "0")])).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
