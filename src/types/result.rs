use crate::types::matrix::Score;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResult {
    pub total_score: Score,
    pub pets_list: Vec<PetsResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetsResult {
    pub pets_id: String,
    pub pets_name: String,
    pub total_score: Score,
    pub requirement_groups: Vec<RequirementGroup>,
    #[serde(rename = "uvL1List")]
    pub uv_l1_list: Vec<UvL1Group>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementGroup {
    pub category_name: String,
    pub total_score: Score,
    pub l1_list: Vec<L1Result>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L1Result {
    pub l1_name: String,
    pub total_score: Score,
    pub l2_list: Vec<L2Score>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2Score {
    pub l2_name: String,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UvL1Group {
    pub l1_name: String,
    pub l1_category: String,
    pub l1_weight: Score,
    pub total_score: Score,
    pub l2_list: Vec<L2Score>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResult {
    pub enhanced: SectionResult,
    pub reduced: SectionResult,
    pub total_enhanced: Score,
    pub total_reduced: Score,
    pub final_score: Score,
    pub meta: CombinedMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedMeta {
    pub validation_summary: ValidationSummary,
    pub selection_count: SelectionCount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub has_selections: bool,
    pub missing_kano_type: bool,
    pub missing_usage_rate: bool,
    pub missing_penetration_rate: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCount {
    pub pets: usize,
    pub uv: usize,
    pub enhanced: usize,
    pub reduced: usize,
}
