//! CLI smoke tests.
//!
//! Each test drives the compiled binary through a full command against
//! small fixture tables in a temporary directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn secular() -> Command {
    Command::cargo_bin("secular").unwrap()
}

/// Two complete years of monthly data, both moving every index by 5%.
fn write_monthly(dir: &TempDir) -> std::path::PathBuf {
    let mut csv = String::from("Date,P,Bond Index,CPI\n");
    for year in [1929, 1930] {
        for month in 1..=12 {
            let t = (month - 1) as f64 / 11.0;
            csv.push_str(&format!(
                "{}.{:02},{:.4},{:.4},{:.4}\n",
                year,
                month,
                100.0 + 5.0 * t,
                200.0 + 10.0 * t,
                20.0 + 1.0 * t
            ));
        }
    }
    let path = dir.path().join("ie-data.csv");
    std::fs::write(&path, csv).unwrap();
    path
}

#[test]
fn extract_shiller_writes_artifact() {
    let dir = TempDir::new().unwrap();
    let input = write_monthly(&dir);
    let output = dir.path().join("historical-data.ts");

    secular()
        .args(["extract", "shiller"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("export const historicalData"));
    assert!(text.contains("{ year: 1930, stockReturn: 0.050000"));
}

#[test]
fn extract_to_stdout_when_no_output() {
    let dir = TempDir::new().unwrap();
    let input = write_monthly(&dir);

    secular()
        .args(["extract", "shiller", "--quiet"])
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("export const historicalData"));
}

#[test]
fn stats_reports_each_field() {
    let dir = TempDir::new().unwrap();
    let input = write_monthly(&dir);
    let artifact = dir.path().join("historical-data.ts");

    secular()
        .args(["extract", "shiller"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&artifact)
        .assert()
        .success();

    secular()
        .args(["stats", "--collection", "historicalData"])
        .arg("--artifact")
        .arg(&artifact)
        .assert()
        .success()
        .stdout(predicate::str::contains("stockReturn"))
        .stdout(predicate::str::contains("5.00%"));
}

#[test]
fn stats_rejects_inverted_year_range() {
    let dir = TempDir::new().unwrap();
    let input = write_monthly(&dir);
    let artifact = dir.path().join("historical-data.ts");

    secular()
        .args(["extract", "shiller"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&artifact)
        .assert()
        .success();

    secular()
        .args([
            "stats",
            "--collection",
            "historicalData",
            "--start-year",
            "1930",
            "--end-year",
            "1929",
        ])
        .arg("--artifact")
        .arg(&artifact)
        .assert()
        .failure();
}

#[test]
fn compare_series_with_itself_is_exact() {
    let dir = TempDir::new().unwrap();
    let input = write_monthly(&dir);
    let artifact = dir.path().join("historical-data.ts");

    secular()
        .args(["extract", "shiller"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&artifact)
        .assert()
        .success();

    secular()
        .args([
            "compare",
            "--collection-a",
            "historicalData",
            "--collection-b",
            "historicalData",
            "--fields",
            "stockReturn",
        ])
        .arg("--artifact-a")
        .arg(&artifact)
        .arg("--artifact-b")
        .arg(&artifact)
        .assert()
        .success()
        .stdout(predicate::str::contains("stockReturn comparison"));
}

#[test]
fn missing_input_fails_with_path_in_message() {
    secular()
        .args(["extract", "shiller", "--input", "no-such-file.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.csv"));
}
