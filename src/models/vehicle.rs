//! Modelo de Vehicle
//!
//! Este módulo contiene el registro de vehículo del catálogo, los criterios de
//! filtrado, la clave de orden y la página de resultados que devuelve el motor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Estado del vehículo a la venta
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    Used,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Used => "Used",
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "New" => Ok(Condition::New),
            "Used" => Ok(Condition::Used),
            other => Err(format!("unknown condition '{}'", other)),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tracción del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Drivetrain {
    #[serde(rename = "FWD")]
    Fwd,
    #[serde(rename = "RWD")]
    Rwd,
    #[serde(rename = "AWD")]
    Awd,
}

impl Drivetrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Drivetrain::Fwd => "FWD",
            Drivetrain::Rwd => "RWD",
            Drivetrain::Awd => "AWD",
        }
    }
}

impl FromStr for Drivetrain {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "FWD" => Ok(Drivetrain::Fwd),
            "RWD" => Ok(Drivetrain::Rwd),
            "AWD" => Ok(Drivetrain::Awd),
            other => Err(format!("unknown drivetrain '{}'", other)),
        }
    }
}

impl fmt::Display for Drivetrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehículo del catálogo - mapea exactamente al documento JSON de datos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRecord {
    pub id: u64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub range_km: f64,
    pub color: String,
    pub condition: Condition,
    #[serde(rename = "battery_capacity_kWh")]
    pub battery_capacity_kwh: f64,
    #[serde(rename = "charging_speed_kW")]
    pub charging_speed_kw: f64,
    pub seats: u32,
    pub drivetrain: Drivetrain,
    pub location: String,
    pub autopilot: bool,
    pub kilometer_count: u64,
    pub accidents: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accident_description: Option<String>,
    pub images: Vec<String>,
}

/// Rango cerrado `[min, max]`
///
/// No se valida que `min <= max`: un rango invertido simplemente no
/// deja pasar ningún vehículo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Filtros para búsqueda de vehículos
///
/// Cada campo ausente (`None`) no impone ninguna restricción. Las listas
/// vacías de `condition` y `drivetrain` también se tratan como ausentes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VehicleFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<ValueRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Vec<Condition>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drivetrain: Option<Vec<Drivetrain>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<ValueRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autopilot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_accidents: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl VehicleFilters {
    /// `true` si ningún filtro restringe el resultado
    pub fn is_empty(&self) -> bool {
        self.price_range.is_none()
            && self.year.is_none()
            && self.condition.as_ref().map_or(true, Vec::is_empty)
            && self.drivetrain.as_ref().map_or(true, Vec::is_empty)
            && self.range.is_none()
            && self.autopilot.is_none()
            && self.no_accidents != Some(true)
            && self.search.as_deref().map_or(true, str::is_empty)
    }
}

/// Clave de orden del listado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    YearDesc,
    RangeDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::YearDesc => "year_desc",
            SortKey::RangeDesc => "range_desc",
        }
    }

    /// Interpretar el valor de `orderBy` o del selector de orden.
    ///
    /// `"default"` y los valores desconocidos significan "sin orden".
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "price_asc" => Some(SortKey::PriceAsc),
            "price_desc" => Some(SortKey::PriceDesc),
            "year_desc" => Some(SortKey::YearDesc),
            "range_desc" => Some(SortKey::RangeDesc),
            _ => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Página de resultados del listado
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehiclePage {
    pub data: Vec<VehicleRecord>,
    pub total: usize,
    pub per_page: usize,
    pub current_page: u32,
    pub last_page: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_field_names() {
        let json = serde_json::json!({
            "id": 1,
            "brand": "Tesla",
            "model": "Model S",
            "year": 2023,
            "price": 89990,
            "range_km": 600,
            "color": "Red",
            "condition": "New",
            "battery_capacity_kWh": 100,
            "charging_speed_kW": 250,
            "seats": 5,
            "drivetrain": "AWD",
            "location": "New York",
            "autopilot": true,
            "kilometer_count": 0,
            "accidents": false,
            "images": ["image1.jpg"]
        });

        let record: VehicleRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.drivetrain, Drivetrain::Awd);
        assert_eq!(record.battery_capacity_kwh, 100.0);
        assert!(record.accident_description.is_none());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["charging_speed_kW"], 250.0);
        assert_eq!(back["condition"], "New");
        assert!(back.get("accident_description").is_none());
    }

    #[test]
    fn test_sort_key_from_param() {
        assert_eq!(SortKey::from_param("price_asc"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::from_param("range_desc"), Some(SortKey::RangeDesc));
        assert_eq!(SortKey::from_param("default"), None);
        assert_eq!(SortKey::from_param("color_asc"), None);
    }

    #[test]
    fn test_filters_is_empty() {
        assert!(VehicleFilters::default().is_empty());
        assert!(VehicleFilters {
            condition: Some(vec![]),
            no_accidents: Some(false),
            search: Some(String::new()),
            ..Default::default()
        }
        .is_empty());
        assert!(!VehicleFilters {
            year: Some(2023),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_value_range_is_inclusive() {
        let range = ValueRange::new(50_000.0, 100_000.0);
        assert!(range.contains(50_000.0));
        assert!(range.contains(100_000.0));
        assert!(!range.contains(100_000.01));
        assert!(!ValueRange::new(10.0, 5.0).contains(7.0));
    }
}
