use thiserror::Error;

#[derive(Error, Debug)]
pub enum UvaError {
    #[error("vehicle is required")]
    VehicleRequired,

    #[error("invalid vehicle id: {0}")]
    InvalidVehicleId(String),

    #[error("no score matrix for vehicle: {0}")]
    MatrixNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UvaError>;
