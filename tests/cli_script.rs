use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget_chart_cli").unwrap();
    cmd.env("BUDGET_CHART_HOME", home.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn donut_json_contains_both_rings() {
    let home = TempDir::new().unwrap();
    let output = cli(&home)
        .args(["donut", fixture("breakdown.json").as_str(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let chart: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chart["title"], "Your Advanced Budget Plan");
    assert_eq!(chart["outer"]["points"].as_array().unwrap().len(), 4);
    assert_eq!(chart["inner"]["points"].as_array().unwrap().len(), 6);
    assert_eq!(chart["inner"]["points"][4]["label"], "Dining: 5%");
}

#[test]
fn narrow_recommended_preview_hides_inner_labels() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args([
            "donut",
            fixture("breakdown.json").as_str(),
            "--recommended",
            "--width",
            "350",
        ])
        .assert()
        .success()
        .stdout(contains("Recommended Advanced Budget Plan"))
        .stdout(contains("surface width: 350"))
        .stdout(contains("Rent: 30%").not());
}

#[test]
fn malformed_breakdown_fails_without_output() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["donut", fixture("malformed_breakdown.json").as_str(), "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Malformed breakdown"));
}

#[test]
fn projection_uses_explicit_start_year() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["projection", fixture("projection.json").as_str(), "--start-year", "2017"])
        .assert()
        .success()
        .stdout(contains("Your Expenses Over the Next 5 Years"))
        .stdout(contains("2017"))
        .stdout(contains("2021"));
}

#[test]
fn configured_thresholds_change_labels() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("config");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        r#"{ "labels": { "outer_threshold": 30.0 }, "ui_color_enabled": false }"#,
    )
    .unwrap();

    let output = cli(&home)
        .args(["donut", fixture("breakdown.json").as_str(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let chart: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chart["outer"]["points"][0]["label"], "Home");
    assert!(chart["outer"]["points"][1].get("label").is_none());
}

#[test]
fn config_reset_and_path() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["config", "reset"])
        .assert()
        .success()
        .stdout(contains("Configuration reset"));
    assert!(home.path().join("config/config.json").exists());

    cli(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains("config.json"));
}

#[test]
fn unknown_command_is_usage_error() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .arg("pie")
        .assert()
        .failure()
        .stderr(contains("Usage: unknown command `pie`"));
}

#[test]
fn pie_json_has_one_labelled_slice_per_category() {
    let home = TempDir::new().unwrap();
    let output = cli(&home)
        .args(["pie", fixture("breakdown.json").as_str(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let chart: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(chart["title"], "Your Budget Plan");
    assert_eq!(chart["series_name"], "Delivered amount");
    assert_eq!(chart["inner_size"], 100);
    let points = chart["points"].as_array().unwrap();
    assert_eq!(points.len(), 4);
    assert_eq!(points[3]["name"], "Discretionary");
    assert_eq!(points[3]["label"], "Discretionary");
}

#[test]
fn recommended_pie_preview_names_expense_series() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["pie", fixture("breakdown.json").as_str(), "--recommended"])
        .assert()
        .success()
        .stdout(contains("Recommended Budget Plan"))
        .stdout(contains("Expense amount"))
        .stdout(contains("Rent").not());
}

#[test]
fn malformed_breakdown_yields_no_pie() {
    let home = TempDir::new().unwrap();
    cli(&home)
        .args(["pie", fixture("malformed_breakdown.json").as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("Malformed breakdown"));
}
