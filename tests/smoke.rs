//! Smoke tests -- drive the binary end to end.

use assert_cmd::Command;
use std::io::Write;

fn scistat() -> Command {
    let mut cmd = Command::cargo_bin("scistat").unwrap();
    cmd.env_remove("SCISTAT_CONFIG");
    cmd
}

fn dataset(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", text).unwrap();
    file
}

#[test]
fn test_cli_help() {
    scistat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("exploratory scientific data analysis"));
}

#[test]
fn test_cli_version() {
    scistat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("scistat"));
}

#[test]
fn test_summary_json_has_all_keys() {
    let file = dataset("1 2 3 4 5 6 7 8 9 10\n");
    let output = scistat()
        .args(["summary", "--json", "--name", "test_data", "--input"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["name"], "test_data");
    assert_eq!(report["n_samples"], 10);
    let summary = report["summary"].as_object().unwrap();
    for key in ["mean", "median", "std", "min", "max", "q25", "q75"] {
        assert!(summary.contains_key(key), "missing {}", key);
    }
    assert_eq!(summary["mean"], 5.5);
}

#[test]
fn test_summary_from_stdin() {
    scistat()
        .arg("summary")
        .write_stdin("1,2,3,4,5\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("dataset (5 samples)"))
        .stdout(predicates::str::contains("median"));
}

#[test]
fn test_outliers_iqr() {
    let file = dataset("1\n2\n3\n4\n5\n100\n");
    scistat()
        .args(["outliers", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("5        | 100"));
}

#[test]
fn test_outliers_json_mask() {
    let output = scistat()
        .args(["outliers", "--json"])
        .write_stdin("1 2 3 4 5 100")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["method"], "iqr");
    assert_eq!(report["threshold"], 1.5);
    assert_eq!(
        report["mask"],
        serde_json::json!([false, false, false, false, false, true])
    );
}

#[test]
fn test_config_sets_outlier_method() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[outliers]\nmethod = \"zscore\"\nthreshold = 3.0").unwrap();

    let output = scistat()
        .arg("--config")
        .arg(config.path())
        .args(["outliers", "--json"])
        .write_stdin("1 2 3 4 5 100")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["method"], "zscore");
    assert_eq!(report["threshold"], 3.0);
}

#[test]
fn test_normalize_minmax() {
    scistat()
        .args(["normalize", "--method", "minmax", "--json"])
        .write_stdin("2 4 6 10")
        .assert()
        .success()
        .stdout(predicates::str::contains("[0.0,0.25,0.5,1.0]"));
}

#[test]
fn test_normalize_unknown_method_rejected() {
    scistat()
        .args(["normalize", "--method", "bogus"])
        .write_stdin("1 2 3")
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown method 'bogus'"));
}

#[test]
fn test_regress() {
    let x = dataset("1 2 3 4 5");
    let y = dataset("2 4 5 4 5");
    scistat()
        .arg("regress")
        .arg("--x")
        .arg(x.path())
        .arg("--y")
        .arg(y.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("y = 0.6000x + 2.2000"));
}

#[test]
fn test_regress_length_mismatch() {
    let x = dataset("1 2 3");
    let y = dataset("1 2");
    scistat()
        .arg("regress")
        .arg("--x")
        .arg(x.path())
        .arg("--y")
        .arg(y.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("length mismatch"));
}

#[test]
fn test_invalid_number_reported() {
    scistat()
        .arg("mean-std")
        .write_stdin("1 2 x")
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid number 'x'"));
}

#[test]
fn test_bad_explicit_config_fails() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[outliers]\nmethod = \"mad\"\nthreshold = 3.0").unwrap();

    scistat()
        .arg("--config")
        .arg(config.path())
        .args(["outliers", "--json"])
        .write_stdin("1 2 3 4 5 100")
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown method 'mad'"));
}

#[test]
fn test_missing_explicit_config_fails() {
    scistat()
        .args(["--config", "/nonexistent/scistat.toml", "mean-std"])
        .write_stdin("1 2 3")
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read config file"));
}

#[test]
fn test_bad_env_config_falls_back() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    writeln!(config, "[outliers]\nmethod = \"mad\"").unwrap();

    let output = scistat()
        .env("SCISTAT_CONFIG", config.path())
        .args(["outliers", "--json"])
        .write_stdin("1 2 3 4 5 100")
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["method"], "iqr");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown method 'mad'"), "{}", stderr);
}

#[test]
fn test_non_finite_value_reported() {
    scistat()
        .arg("summary")
        .write_stdin("1 2\nNaN\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("line 2: non-finite number 'NaN'"));
}
