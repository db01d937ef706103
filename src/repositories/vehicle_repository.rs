use crate::models::vehicle::VehicleRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Errores al cargar el documento de vehículos
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not read vehicle data file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid vehicle data document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate vehicle id {0}")]
    DuplicateId(u64),

    #[error("Vehicle {0} has no images")]
    EmptyImages(u64),
}

// Documento estático: { "data": [ ...vehículos ] }
#[derive(Debug, Deserialize)]
struct VehicleDataFile {
    data: Vec<VehicleRecord>,
}

/// Colección canónica de vehículos, de solo lectura durante toda la vida del proceso
#[derive(Debug, Clone)]
pub struct VehicleStore {
    records: Arc<Vec<VehicleRecord>>,
}

impl VehicleStore {
    pub fn new(records: Vec<VehicleRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            if record.images.is_empty() {
                return Err(StoreError::EmptyImages(record.id));
            }
            if record.accidents && record.accident_description.is_none() {
                log::warn!("⚠️ Vehículo {} con accidentes pero sin descripción", record.id);
            }
        }

        Ok(Self {
            records: Arc::new(records),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let file: VehicleDataFile = serde_json::from_str(json)?;
        Self::new(file.data)
    }

    /// Cargar el documento JSON una sola vez al arrancar
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        log::info!("📂 Cargando vehículos desde {}", path.display());

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let store = Self::from_json(&json)?;
        log::info!("✅ {} vehículos cargados", store.len());
        Ok(store)
    }

    pub fn all(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn find_by_id(&self, id: u64) -> Option<&VehicleRecord> {
        self.records.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(ids: &[u64]) -> String {
        let data: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                serde_json::json!({
                    "id": id,
                    "brand": "Tesla",
                    "model": "Model 3",
                    "year": 2022,
                    "price": 42000,
                    "range_km": 490,
                    "color": "White",
                    "condition": "Used",
                    "battery_capacity_kWh": 60,
                    "charging_speed_kW": 170,
                    "seats": 5,
                    "drivetrain": "RWD",
                    "location": "Berlin",
                    "autopilot": true,
                    "kilometer_count": 12000,
                    "accidents": false,
                    "images": ["/images/model3.jpg"]
                })
            })
            .collect();
        serde_json::json!({ "data": data }).to_string()
    }

    #[test]
    fn test_from_json_and_lookup() {
        let store = VehicleStore::from_json(&document(&[1, 2, 3])).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id(2).map(|v| v.id), Some(2));
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let err = VehicleStore::from_json(&document(&[1, 2, 1])).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(1)));
    }

    #[test]
    fn test_invalid_document() {
        let err = VehicleStore::from_json("{\"vehicles\": []}").unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = VehicleStore::load("does/not/exist.json").await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_bundled_data() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/vehicle_data.json");
        let store = VehicleStore::load(path).await.unwrap();
        assert!(!store.is_empty());
    }
}
