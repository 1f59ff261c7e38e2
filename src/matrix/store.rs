use super::MatrixProvider;
use crate::error::{Result, UvaError};
use crate::types::matrix::ScoreMatrix;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct JsonDirectoryStore {
    matrix_dir: PathBuf,
}

impl JsonDirectoryStore {
    pub fn new(matrix_dir: impl Into<PathBuf>) -> Self {
        Self {
            matrix_dir: matrix_dir.into(),
        }
    }

    pub fn matrix_dir(&self) -> &Path {
        &self.matrix_dir
    }

    pub fn matrix_path(&self, vehicle: &str) -> Result<PathBuf> {
        let id = normalize_vehicle_id(vehicle)?;
        Ok(self.matrix_dir.join(format!("{id}.json")))
    }

    pub fn has_matrix(&self, vehicle: &str) -> bool {
        self.matrix_path(vehicle)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}

impl MatrixProvider for JsonDirectoryStore {
    fn load(&self, vehicle: &str) -> Result<ScoreMatrix> {
        let path = self.matrix_path(vehicle)?;
        if !path.is_file() {
            return Err(UvaError::MatrixNotFound(vehicle.to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let matrix: ScoreMatrix = serde_json::from_str(&content)?;
        debug!(%vehicle, path = %path.display(), entries = matrix.len(), "score matrix loaded");

        let duplicates = matrix.duplicate_leaf_names();
        if !duplicates.is_empty() {
            warn!(
                %vehicle,
                duplicates = %duplicates.join(", "),
                "duplicate leaf names in matrix; first occurrence wins"
            );
        }
        Ok(matrix)
    }
}

pub fn normalize_vehicle_id(vehicle: &str) -> Result<String> {
    let id = vehicle.trim();
    if id.is_empty() {
        return Err(UvaError::VehicleRequired);
    }
    if id.contains(['/', '\\']) || id.contains("..") {
        return Err(UvaError::InvalidVehicleId(vehicle.to_string()));
    }
    Ok(id.to_lowercase())
}
