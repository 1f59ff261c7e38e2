use super::store::JsonDirectoryStore;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

pub const VEHICLES_FILE: &str = "vehicles.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleStatus {
    pub id: String,
    pub name: String,
    pub has_data: bool,
}

pub fn vehicle_status(data_dir: &Path, store: &JsonDirectoryStore) -> Result<Vec<VehicleStatus>> {
    let listing = data_dir.join(VEHICLES_FILE);
    let vehicles = if listing.is_file() {
        let content = fs::read_to_string(&listing)?;
        serde_json::from_str::<Vec<Vehicle>>(&content)?
    } else {
        discover_vehicles(store.matrix_dir())
    };

    Ok(vehicles
        .into_iter()
        .map(|vehicle| VehicleStatus {
            has_data: store.has_matrix(&vehicle.id),
            id: vehicle.id,
            name: vehicle.name,
        })
        .collect())
}

fn discover_vehicles(matrix_dir: &Path) -> Vec<Vehicle> {
    let mut vehicles: Vec<Vehicle> = WalkDir::new(matrix_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("json"))
        .filter_map(|entry| {
            let stem = entry.path().file_stem()?.to_str()?.to_string();
            // The store only opens lowercase file names.
            if stem != stem.to_lowercase() {
                warn!(path = %entry.path().display(), "skipping matrix file with uppercase name");
                return None;
            }
            Some(Vehicle {
                id: stem.clone(),
                name: stem,
            })
        })
        .collect();
    vehicles.sort_by(|a, b| a.id.cmp(&b.id));
    vehicles
}
