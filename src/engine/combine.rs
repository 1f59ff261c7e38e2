use super::aggregate;
use crate::types::matrix::ScoreMatrix;
use crate::types::result::{CombinedMeta, CombinedResult, SelectionCount, ValidationSummary};
use crate::types::selection::Selection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionFields {
    #[serde(default)]
    pub kano_type: Option<String>,
    #[serde(default)]
    pub usage_rate: Option<f64>,
    #[serde(default)]
    pub penetration_rate: Option<f64>,
}

impl CompanionFields {
    pub fn missing_kano_type(&self) -> bool {
        self.kano_type.as_deref().map_or(true, str::is_empty)
    }

    pub fn missing_usage_rate(&self) -> bool {
        self.usage_rate.is_none()
    }

    pub fn missing_penetration_rate(&self) -> bool {
        self.penetration_rate.is_none()
    }
}

pub fn combine(
    enhanced_selections: &[Selection],
    reduced_selections: &[Selection],
    matrix: &ScoreMatrix,
    companions: &CompanionFields,
) -> CombinedResult {
    let enhanced = aggregate(matrix, enhanced_selections);
    let reduced = aggregate(matrix, reduced_selections);

    let total_enhanced = enhanced.total_score;
    let total_reduced = reduced.total_score;
    let selection_count = selection_count(enhanced_selections, reduced_selections);

    CombinedResult {
        enhanced,
        reduced,
        total_enhanced,
        total_reduced,
        final_score: total_enhanced - total_reduced,
        meta: CombinedMeta {
            validation_summary: ValidationSummary {
                has_selections: selection_count.uv > 0,
                missing_kano_type: companions.missing_kano_type(),
                missing_usage_rate: companions.missing_usage_rate(),
                missing_penetration_rate: companions.missing_penetration_rate(),
            },
            selection_count,
        },
    }
}

// Raw input counts; unmatched and duplicate names are included.
fn selection_count(enhanced: &[Selection], reduced: &[Selection]) -> SelectionCount {
    let leaf_count = |selections: &[Selection]| -> usize {
        selections
            .iter()
            .map(|selection| selection.uv_l2_names.len())
            .sum()
    };
    let enhanced_uv = leaf_count(enhanced);
    let reduced_uv = leaf_count(reduced);

    SelectionCount {
        pets: enhanced.len() + reduced.len(),
        uv: enhanced_uv + reduced_uv,
        enhanced: enhanced_uv,
        reduced: reduced_uv,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::matrix::ScoreMatrixEntry;

    fn matrix() -> ScoreMatrix {
        serde_json::from_str(
            r#"[
                {"l2_name": "A", "l1_name": "G1", "l1_category": "核心差异UV", "l1_weight": 1, "l2_weight": 1, "pets_scores": {"p1": 12}},
                {"l2_name": "B", "l1_name": "G2", "l1_category": "基线UV", "l1_weight": 1, "l2_weight": 1, "pets_scores": {"p2": 5}}
            ]"#,
        )
        .expect("matrix should parse")
    }

    #[test]
    fn final_score_is_enhanced_minus_reduced() {
        let enhanced = [Selection::new("p1", ["A"])];
        let reduced = [Selection::new("p2", ["B"])];

        let result = combine(&enhanced, &reduced, &matrix(), &CompanionFields::default());
        assert_eq!(result.total_enhanced, 12.0);
        assert_eq!(result.total_reduced, 5.0);
        assert_eq!(result.final_score, 7.0);

        let swapped = combine(&reduced, &enhanced, &matrix(), &CompanionFields::default());
        assert_eq!(swapped.total_enhanced, 5.0);
        assert_eq!(swapped.total_reduced, 12.0);
        assert_eq!(swapped.final_score, -7.0);
    }

    #[test]
    fn selection_counts_use_raw_input() {
        let enhanced = [
            Selection::new("p1", ["A", "missing"]),
            Selection::new("p3", Vec::<String>::new()),
        ];
        let reduced = [Selection::new("p2", ["B"])];

        let result = combine(&enhanced, &reduced, &matrix(), &CompanionFields::default());
        assert_eq!(
            result.meta.selection_count,
            SelectionCount {
                pets: 3,
                uv: 3,
                enhanced: 2,
                reduced: 1,
            }
        );
        assert!(result.meta.validation_summary.has_selections);
        assert_eq!(result.enhanced.pets_list.len(), 1);
    }

    #[test]
    fn no_selections_is_a_valid_zero_result() {
        let result = combine(&[], &[], &matrix(), &CompanionFields::default());
        assert_eq!(result.final_score, 0.0);
        assert!(!result.meta.validation_summary.has_selections);
        assert_eq!(result.meta.selection_count, SelectionCount::default());
    }

    #[test]
    fn empty_matrix_degrades_to_zero_totals() {
        let enhanced = [Selection::new("p1", ["A"])];
        let result = combine(
            &enhanced,
            &[],
            &ScoreMatrix::new(Vec::<ScoreMatrixEntry>::new()),
            &CompanionFields::default(),
        );
        assert_eq!(result.final_score, 0.0);
        assert!(result.meta.validation_summary.has_selections);
    }

    #[test]
    fn companion_presence_flags() {
        let missing = CompanionFields::default();
        let result = combine(&[], &[], &matrix(), &missing);
        let summary = result.meta.validation_summary;
        assert!(summary.missing_kano_type);
        assert!(summary.missing_usage_rate);
        assert!(summary.missing_penetration_rate);

        let blank_kano = CompanionFields {
            kano_type: Some(String::new()),
            usage_rate: Some(0.0),
            penetration_rate: Some(0.4),
        };
        let summary = combine(&[], &[], &matrix(), &blank_kano).meta.validation_summary;
        assert!(summary.missing_kano_type);
        assert!(!summary.missing_usage_rate);
        assert!(!summary.missing_penetration_rate);

        let present = CompanionFields {
            kano_type: Some("attractive".to_string()),
            ..CompanionFields::default()
        };
        assert!(!present.missing_kano_type());
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let enhanced = [Selection::new("p1", ["A"])];
        let result = combine(&enhanced, &[], &matrix(), &CompanionFields::default());
        let json = serde_json::to_value(&result).expect("result should serialize");

        assert_eq!(json["finalScore"], 12.0);
        assert_eq!(json["enhanced"]["petsList"][0]["petsName"], "PETS-p1");
        assert_eq!(
            json["enhanced"]["petsList"][0]["requirementGroups"][0]["l1List"][0]["l2List"][0]["l2Name"],
            "A"
        );
        assert!(json["enhanced"]["petsList"][0]["uvL1List"].is_array());
        assert_eq!(json["meta"]["validationSummary"]["hasSelections"], true);
        assert_eq!(json["meta"]["selectionCount"]["uv"], 1);
    }
}
