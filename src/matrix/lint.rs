use crate::engine::category;
use crate::types::matrix::ScoreMatrix;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

impl Finding {
    fn new(id: &str, title: &str, body: String, blocking: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            body,
            blocking,
        }
    }
}

pub fn lint_matrix(matrix: &ScoreMatrix) -> Vec<Finding> {
    let mut findings = Vec::new();

    if matrix.is_empty() {
        findings.push(Finding::new(
            "matrix.empty",
            "Empty score matrix",
            "The matrix has no entries; every selection will score zero.".to_string(),
            false,
        ));
        return findings;
    }

    let duplicates = matrix.duplicate_leaf_names();
    if !duplicates.is_empty() {
        findings.push(Finding::new(
            "leaf.duplicate",
            "Duplicate leaf names",
            format!(
                "Only the first entry is scored for: {}.",
                duplicates.join(", ")
            ),
            true,
        ));
    }

    let blank = matrix
        .entries()
        .iter()
        .filter(|entry| entry.l2_name.trim().is_empty())
        .count();
    if blank > 0 {
        findings.push(Finding::new(
            "leaf.blank_name",
            "Blank leaf names",
            format!("{blank} entries with an empty l2_name cannot be selected."),
            true,
        ));
    }

    let mut unknown: Vec<&str> = Vec::new();
    for entry in matrix.entries() {
        let name = entry.l1_category.as_str();
        if !category::is_known(name) && !unknown.contains(&name) {
            unknown.push(name);
        }
    }
    if !unknown.is_empty() {
        let names: Vec<String> = unknown
            .iter()
            .map(|name| {
                if name.is_empty() {
                    "<empty>".to_string()
                } else {
                    (*name).to_string()
                }
            })
            .collect();
        findings.push(Finding::new(
            "category.unknown",
            "Unrecognised requirement categories",
            format!(
                "These categories sort after all known ones: {}.",
                names.join(", ")
            ),
            false,
        ));
    }

    let unscored: Vec<&str> = matrix
        .entries()
        .iter()
        .filter(|entry| entry.pets_scores.is_empty())
        .map(|entry| entry.l2_name.as_str())
        .collect();
    if !unscored.is_empty() {
        findings.push(Finding::new(
            "leaf.unscored",
            "Leaves without PETS scores",
            format!(
                "These leaves score zero under every PETS: {}.",
                unscored.join(", ")
            ),
            false,
        ));
    }

    findings
}
