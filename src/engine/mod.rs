pub mod category;
pub mod combine;

use crate::types::matrix::{Score, ScoreMatrix, ScoreMatrixEntry};
use crate::types::result::{
    L1Result, L2Score, PetsResult, RequirementGroup, SectionResult, UvL1Group,
};
use crate::types::selection::Selection;
use std::cmp::Ordering;
use tracing::debug;

pub use combine::{combine, CompanionFields};

/// A selection whose leaf names all miss the matrix still yields a PETS entry with a zero total.
pub fn aggregate(matrix: &ScoreMatrix, selections: &[Selection]) -> SectionResult {
    let mut result = SectionResult::default();

    for selection in selections {
        if selection.uv_l2_names.is_empty() {
            continue;
        }
        let pets = score_selection(matrix, selection);
        result.total_score += pets.total_score;
        result.pets_list.push(pets);
    }

    result
        .pets_list
        .sort_by(|a, b| descending(a.total_score, b.total_score));
    result
}

fn score_selection(matrix: &ScoreMatrix, selection: &Selection) -> PetsResult {
    let mut total_score = 0.0;
    let mut groups: Vec<RequirementGroup> = Vec::new();
    let mut flat: Vec<UvL1Group> = Vec::new();

    for l2_name in &selection.uv_l2_names {
        let Some(entry) = matrix.find_leaf(l2_name) else {
            debug!(pets_id = %selection.pets_id, %l2_name, "leaf not in matrix, skipped");
            continue;
        };

        let leaf = L2Score {
            l2_name: l2_name.clone(),
            score: entry.pets_scores.score_for(&selection.pets_id),
        };
        total_score += leaf.score;
        accumulate_flat(&mut flat, entry, leaf.clone());
        accumulate_nested(&mut groups, entry, leaf);
    }

    for group in &mut groups {
        for l1 in &mut group.l1_list {
            l1.l2_list.sort_by(|a, b| descending(a.score, b.score));
        }
        group
            .l1_list
            .sort_by(|a, b| descending(a.total_score, b.total_score));
    }
    groups.sort_by(category::compare_groups);
    flat.sort_by(|a, b| descending(a.total_score, b.total_score));

    PetsResult {
        pets_id: selection.pets_id.clone(),
        pets_name: selection.display_name(),
        total_score,
        requirement_groups: groups,
        uv_l1_list: flat,
    }
}

fn accumulate_nested(groups: &mut Vec<RequirementGroup>, entry: &ScoreMatrixEntry, leaf: L2Score) {
    let group_index = match groups
        .iter()
        .position(|group| group.category_name == entry.l1_category)
    {
        Some(index) => index,
        None => {
            groups.push(RequirementGroup {
                category_name: entry.l1_category.clone(),
                total_score: 0.0,
                l1_list: Vec::new(),
            });
            groups.len() - 1
        }
    };
    let group = &mut groups[group_index];
    group.total_score += leaf.score;

    let l1_index = match group
        .l1_list
        .iter()
        .position(|l1| l1.l1_name == entry.l1_name)
    {
        Some(index) => index,
        None => {
            group.l1_list.push(L1Result {
                l1_name: entry.l1_name.clone(),
                total_score: 0.0,
                l2_list: Vec::new(),
            });
            group.l1_list.len() - 1
        }
    };
    let l1 = &mut group.l1_list[l1_index];
    l1.total_score += leaf.score;
    l1.l2_list.push(leaf);
}

// Keyed on the L1 name alone; category and weight come from the first leaf seen.
fn accumulate_flat(flat: &mut Vec<UvL1Group>, entry: &ScoreMatrixEntry, leaf: L2Score) {
    let index = match flat.iter().position(|l1| l1.l1_name == entry.l1_name) {
        Some(index) => index,
        None => {
            flat.push(UvL1Group {
                l1_name: entry.l1_name.clone(),
                l1_category: entry.l1_category.clone(),
                l1_weight: entry.l1_weight,
                total_score: 0.0,
                l2_list: Vec::new(),
            });
            flat.len() - 1
        }
    };
    let l1 = &mut flat[index];
    l1.total_score += leaf.score;
    l1.l2_list.push(leaf);
}

fn descending(a: Score, b: Score) -> Ordering {
    b.total_cmp(&a)
}
