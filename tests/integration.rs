// Integration tests for the uva CLI surface and the scoring library.
//
// CLI checks use assert_cmd to invoke the binary; library checks drive the
// public API against a matrix stored on disk.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use uva::engine::category::CORE_DIFFERENTIATOR;
use uva::{aggregate, combine, CompanionFields, JsonDirectoryStore, MatrixProvider, Selection};

/// Helper to build a Command for the uva binary.
fn uva() -> Command {
    Command::cargo_bin("uva").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    uva()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("uva"));
}

#[test]
fn cli_help_flag() {
    uva()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("User value analysis"));
}

#[test]
fn calculate_requires_request() {
    uva()
        .arg("calculate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn validate_requires_vehicle() {
    uva()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_and_verbose_conflict() {
    uva()
        .args(["-q", "-v", "vehicles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn stored_matrix_scores_end_to_end() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("cetus.json"),
        r#"[
          {"l2_name": "A", "l1_name": "G1", "l1_category": "核心差异UV", "l1_weight": 1, "l2_weight": 1, "pets_scores": {"p1": 10}},
          {"l2_name": "B", "l1_name": "G1", "l1_category": "核心差异UV", "l1_weight": 1, "l2_weight": 1, "pets_scores": {"p1": 5}}
        ]"#,
    )
    .expect("matrix should write");

    let store = JsonDirectoryStore::new(dir.path());
    let matrix = store.load("cetus").expect("matrix should load");
    let selections = [Selection::new("p1", ["A", "B"]).with_name("Dim1")];

    let section = aggregate(&matrix, &selections);
    let pets = &section.pets_list[0];
    assert_eq!(pets.total_score, 15.0);
    assert_eq!(pets.requirement_groups[0].category_name, CORE_DIFFERENTIATOR);
    let leaves: Vec<_> = pets.requirement_groups[0].l1_list[0]
        .l2_list
        .iter()
        .map(|l2| (l2.l2_name.as_str(), l2.score))
        .collect();
    assert_eq!(leaves, vec![("A", 10.0), ("B", 5.0)]);

    let combined = combine(&selections, &selections, &matrix, &CompanionFields::default());
    assert_eq!(combined.final_score, 0.0);
    assert_eq!(combined.meta.selection_count.uv, 4);
}
