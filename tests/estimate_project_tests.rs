use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const PROJECT_YAML: &str = r#"
name: Demo
start_date: 2026-03-01
duration_months: 1
budget: 30000
spent: 10000
team_members:
  - name: Michael Chen
    role: Backend Developer
    compensation: hourly
    cost_value: 90
    allocation: 100
  - name: Emma Williams
    role: Project Manager
    compensation: monthly
    cost_value: 6000
    allocation: 60
features:
  - name: Checkout
    complexity: High
    story_points: 13
vendor_costs:
  - name: AWS Infrastructure
    monthly_cost: 2500
one_time_costs:
  - name: Security audit
    cost: 4000
"#;

#[test]
fn estimate_prints_report_and_writes_yaml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("project.yaml");
    input.write_str(PROJECT_YAML).unwrap();
    let output = temp.child("report.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args([
        "estimate",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Project: Demo"))
        .stdout(predicate::str::contains("Schedule: 2026-03-01 to 2026-04-01"))
        .stdout(predicate::str::contains("Realistic * | 25625.00"))
        .stdout(predicate::str::contains("One-time costs: 4000.00"))
        .stdout(predicate::str::contains("Estimate report written to"));

    let report = fs::read_to_string(output.path()).unwrap();
    assert!(report.contains("project: Demo"));
    assert!(report.contains("selected_scenario: Realistic"));
    assert!(report.contains("risk_level: Normal"));
    assert!(report.contains("health: OnTrack"));
    assert!(report.contains("one_time_costs: 4000.0"));
}

#[test]
fn estimate_writes_json_for_the_selected_scenario() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("project.yaml");
    input.write_str(PROJECT_YAML).unwrap();
    let output = temp.child("report.json");

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args([
        "estimate",
        "-i",
        input.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
        "-s",
        "pessimistic",
        "-f",
        "json",
    ]);
    cmd.assert().success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(report["selected_scenario"], "Pessimistic");
    assert_eq!(report["capacity"]["demand_hours"], 104.0);
    assert_eq!(report["budget"]["usage_percent"], 33);
    assert_eq!(report["scenarios"][2]["scenario"], "Pessimistic");
}

#[test]
fn estimate_without_output_only_prints() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("project.yaml");
    input.write_str(PROJECT_YAML).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["estimate", "-i", input.path().to_str().unwrap(), "-s", "optimistic"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Optimistic * | 20500.00"))
        .stdout(predicate::str::contains("written to").not());
}

#[test]
fn estimate_flags_overloaded_scope() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("project.yaml");
    let features = "  - story_points: 13\n".repeat(20);
    input
        .write_str(&format!(
            "name: Crunch\nduration_months: 1\nteam_members:\n  - role: Developer\n    cost_value: 80\nfeatures:\n{features}"
        ))
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["estimate", "-i", input.path().to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Risk: overloaded"))
        .stdout(predicate::str::contains("Suggested duration: 13 months"))
        .stdout(predicate::str::contains("Reality check: You allocated 1 months"));
}

#[test]
fn estimate_fails_on_invalid_allocation() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("project.yaml");
    input
        .write_str("name: Broken\nduration_months: 2\nteam_members:\n  - name: Max\n    allocation: 150\n")
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["estimate", "-i", input.path().to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "allocation of team member Max must be between 0 and 100, got 150",
        ));
}

#[test]
fn estimate_fails_on_missing_input() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["estimate", "-i", "does-not-exist.yaml"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read project yaml"));
}
