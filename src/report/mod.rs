pub mod json;
pub mod md;

use crate::error::UvaError;
use crate::request::VehicleAnalysis;
use crate::types::config::ReportFormat;

pub fn render(
    analysis: &VehicleAnalysis,
    format: ReportFormat,
    decimals: u8,
) -> Result<String, UvaError> {
    match format {
        ReportFormat::Json => json::to_json(analysis).map_err(UvaError::Json),
        ReportFormat::Md => Ok(md::to_markdown(analysis, usize::from(decimals))),
    }
}
