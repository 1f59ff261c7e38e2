use crate::request::VehicleAnalysis;

pub fn to_json(analysis: &VehicleAnalysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analysis)
}
