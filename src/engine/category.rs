use crate::types::result::RequirementGroup;
use std::cmp::Ordering;

pub const CORE_DIFFERENTIATOR: &str = "核心差异UV";
pub const BASELINE: &str = "基线UV";
pub const WEAK_DEMAND: &str = "弱需求";

pub const CATEGORY_PRIORITY: [(&str, u8); 3] =
    [(CORE_DIFFERENTIATOR, 3), (BASELINE, 2), (WEAK_DEMAND, 1)];

pub fn priority(category: &str) -> u8 {
    CATEGORY_PRIORITY
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

pub fn is_known(category: &str) -> bool {
    priority(category) > 0
}

pub fn compare_groups(a: &RequirementGroup, b: &RequirementGroup) -> Ordering {
    priority(&b.category_name)
        .cmp(&priority(&a.category_name))
        .then_with(|| b.total_score.total_cmp(&a.total_score))
}
