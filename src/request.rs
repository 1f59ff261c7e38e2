use crate::engine::{combine, CompanionFields};
use crate::error::{Result, UvaError};
use crate::matrix::MatrixProvider;
use crate::types::result::CombinedResult;
use crate::types::selection::Selection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    #[serde(default)]
    pub vehicle: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub enhanced_pets: Vec<Selection>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reduced_pets: Vec<Selection>,
    #[serde(flatten)]
    pub companions: CompanionFields,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAnalysis {
    pub vehicle: String,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: CombinedResult,
}

pub fn parse_request(content: &str) -> Result<CalculateRequest> {
    serde_json::from_str(content).map_err(|err| UvaError::InvalidRequest(err.to_string()))
}

pub fn handle<P>(provider: &P, request: &CalculateRequest) -> Result<VehicleAnalysis>
where
    P: MatrixProvider + ?Sized,
{
    let vehicle = request.vehicle.trim();
    if vehicle.is_empty() {
        return Err(UvaError::VehicleRequired);
    }

    let matrix = provider.load(vehicle)?;
    let result = combine(
        &request.enhanced_pets,
        &request.reduced_pets,
        &matrix,
        &request.companions,
    );
    info!(
        %vehicle,
        total_enhanced = result.total_enhanced,
        total_reduced = result.total_reduced,
        final_score = result.final_score,
        "uva calculated"
    );

    Ok(VehicleAnalysis {
        vehicle: vehicle.to_string(),
        generated_at: Utc::now(),
        result,
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Selection>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Selection>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::matrix::ScoreMatrix;
    use std::collections::HashMap;

    struct InMemoryProvider(HashMap<String, ScoreMatrix>);

    impl MatrixProvider for InMemoryProvider {
        fn load(&self, vehicle: &str) -> Result<ScoreMatrix> {
            self.0
                .get(vehicle)
                .cloned()
                .ok_or_else(|| UvaError::MatrixNotFound(vehicle.to_string()))
        }
    }

    fn provider() -> InMemoryProvider {
        let matrix: ScoreMatrix = serde_json::from_str(
            r#"[
                {"l2_name": "A", "l1_name": "G1", "l1_category": "核心差异UV", "l1_weight": 1, "l2_weight": 1, "pets_scores": {"p1": 10}},
                {"l2_name": "B", "l1_name": "G1", "l1_category": "核心差异UV", "l1_weight": 1, "l2_weight": 1, "pets_scores": {"p1": 5}}
            ]"#,
        )
        .expect("matrix should parse");
        InMemoryProvider(HashMap::from([("cetus".to_string(), matrix)]))
    }

    #[test]
    fn parse_request_accepts_camel_case_payload() {
        let request = parse_request(
            r#"{
                "vehicle": "cetus",
                "enhancedPets": [{"petsId": "p1", "petsName": "Dim1", "uvL2Names": ["A", "B"]}],
                "reducedPets": null,
                "kanoType": "attractive",
                "usageRate": 0.6
            }"#,
        )
        .expect("request should parse");

        assert_eq!(request.vehicle, "cetus");
        assert_eq!(request.enhanced_pets.len(), 1);
        assert!(request.reduced_pets.is_empty());
        assert_eq!(request.companions.kano_type.as_deref(), Some("attractive"));
        assert_eq!(request.companions.usage_rate, Some(0.6));
        assert_eq!(request.companions.penetration_rate, None);
    }

    #[test]
    fn parse_request_rejects_malformed_json() {
        let err = parse_request("{\"vehicle\": ").expect_err("parse should fail");
        assert!(matches!(err, UvaError::InvalidRequest(_)));
    }

    #[test]
    fn handle_scores_both_directions() {
        let request = parse_request(
            r#"{
                "vehicle": "cetus",
                "enhancedPets": [{"petsId": "p1", "uvL2Names": ["A", "B"]}],
                "reducedPets": [{"petsId": "p1", "uvL2Names": ["B"]}]
            }"#,
        )
        .expect("request should parse");

        let analysis = handle(&provider(), &request).expect("handle should succeed");
        assert_eq!(analysis.vehicle, "cetus");
        assert_eq!(analysis.result.total_enhanced, 15.0);
        assert_eq!(analysis.result.total_reduced, 5.0);
        assert_eq!(analysis.result.final_score, 10.0);
        assert!(analysis.result.meta.validation_summary.missing_kano_type);
    }

    #[test]
    fn handle_requires_vehicle() {
        let err = handle(&provider(), &CalculateRequest::default()).expect_err("should fail");
        assert!(matches!(err, UvaError::VehicleRequired));
    }

    #[test]
    fn missing_matrix_differs_from_missing_selections() {
        let no_data = CalculateRequest {
            vehicle: "orion".to_string(),
            ..CalculateRequest::default()
        };
        let err = handle(&provider(), &no_data).expect_err("should fail");
        assert!(matches!(err, UvaError::MatrixNotFound(_)));

        let no_selections = CalculateRequest {
            vehicle: "cetus".to_string(),
            ..CalculateRequest::default()
        };
        let analysis = handle(&provider(), &no_selections).expect("should succeed");
        assert!(!analysis.result.meta.validation_summary.has_selections);
        assert_eq!(analysis.result.final_score, 0.0);
    }

    #[test]
    fn analysis_serializes_flat_with_vehicle() {
        let request = CalculateRequest {
            vehicle: "cetus".to_string(),
            enhanced_pets: vec![Selection::new("p1", ["A"])],
            ..CalculateRequest::default()
        };
        let analysis = handle(&provider(), &request).expect("should succeed");
        let json = serde_json::to_value(&analysis).expect("analysis should serialize");

        assert_eq!(json["vehicle"], "cetus");
        assert!(json["generatedAt"].is_string());
        assert_eq!(json["totalEnhanced"], 10.0);
        assert_eq!(json["enhanced"]["petsList"][0]["totalScore"], 10.0);
    }
}
