//! CLI integration tests over the built binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn rboolean() -> Command {
    Command::cargo_bin("rboolean").expect("binary builds")
}

#[test]
fn test_match_known_title() {
    rboolean()
        .args(["match", "Werkvoorbereider Elektrotechniek"])
        .assert()
        .success()
        .stdout(predicate::str::contains("werkvoorbereider_elektro"));
}

#[test]
fn test_match_unknown_title_reports_unmatched() {
    rboolean()
        .args(["match", "completely unrelated text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unmatched"));
}

#[test]
fn test_match_json_output_is_parseable() {
    let output = rboolean()
        .args(["--json", "match", "Software Developer"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["matched"], "software_engineer");
}

#[test]
fn test_show_renders_variants() {
    rboolean()
        .args(["show", "software_engineer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BASIC"))
        .stdout(predicate::str::contains("\"Software Engineer\" OR \"Software Developer\""));
}

#[test]
fn test_show_unknown_group_fails() {
    rboolean()
        .args(["show", "no_such_group"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown role group"));
}

#[test]
fn test_matrix_duplicate_ids_fail() {
    rboolean()
        .args(["matrix", "software_engineer", "software_engineer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dimension"));
}

#[test]
fn test_hybrid_pools_groups() {
    rboolean()
        .args(["hybrid", "werkvoorbereider_elektro", "werkvoorbereider_installatie"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" AND "));
}

#[test]
fn test_taxonomy_lists_builtin_groups() {
    rboolean()
        .args(["taxonomy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("werkvoorbereider_elektro"))
        .stdout(predicate::str::contains("software_engineer"));
}

#[test]
fn test_process_writes_exports() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vacancies.json");
    std::fs::write(
        &input,
        serde_json::json!([
            {"title": "Software Developer", "location": "Amsterdam"},
            {"title": "nothing recognizable"}
        ])
        .to_string(),
    )
    .unwrap();

    let output_dir = dir.path().join("exports");
    let output = rboolean()
        .args(["--json", "process"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output_dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["vacancies"], 2);
    assert_eq!(value["matched"], 1);
    let files = value["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    for file in files {
        assert!(std::path::Path::new(file.as_str().unwrap()).exists());
    }
}

#[test]
fn test_custom_taxonomy_file() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = dir.path().join("taxonomy.yaml");
    std::fs::write(
        &taxonomy,
        r#"
groups:
  - id: barista
    name: Barista
    titles: ["Barista", "Coffee Specialist"]
    skills: ["Espresso"]
"#,
    )
    .unwrap();

    rboolean()
        .arg("--taxonomy")
        .arg(&taxonomy)
        .args(["match", "Senior Barista"])
        .assert()
        .success()
        .stdout(predicate::str::contains("barista"));
}

#[test]
fn test_duplicate_taxonomy_entry_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy = dir.path().join("broken.yaml");
    std::fs::write(
        &taxonomy,
        r#"
groups:
  - id: dup
    name: One
    titles: ["One"]
  - id: dup
    name: Two
    titles: ["Two"]
"#,
    )
    .unwrap();

    rboolean()
        .arg("--taxonomy")
        .arg(&taxonomy)
        .args(["taxonomy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate"));
}
