use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("chart-palette").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chart-palette"));
}

#[test]
fn color_prints_background_and_text() {
    let mut cmd = Command::cargo_bin("chart-palette").unwrap();
    cmd.args(["color", "Togo", "Unknown Country"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Togo\t#ef4444\t#ffffff"))
        .stdout(predicate::str::contains("Unknown Country\t#84cc16\t#ffffff"));
}

#[test]
fn contrast_prints_text_color() {
    let mut cmd = Command::cargo_bin("chart-palette").unwrap();
    cmd.args(["contrast", "#fff", "xyz"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#fff\t#000000"))
        .stdout(predicate::str::contains("xyz\t#ffffff"));
}

#[test]
fn swatches_saves_csv() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("sw.csv");
    let mut cmd = Command::cargo_bin("chart-palette").unwrap();
    cmd.args(["swatches", "--labels", "Togo;Benin"])
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("Benin,#22c55e,#ffffff"));
}

#[test]
fn tooltip_resolves_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("cfg.json");
    let payload = dir.path().join("p.json");
    std::fs::write(&config, r##"{ "mobile": { "label": "Mobile", "color": "#60a5fa" } }"##).unwrap();
    std::fs::write(&payload, r#"{ "device": "mobile" }"#).unwrap();

    let mut cmd = Command::cargo_bin("chart-palette").unwrap();
    cmd.args(["tooltip", "--key", "device"])
        .arg("--config")
        .arg(&config)
        .arg("--payload")
        .arg(&payload);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"Mobile\""));
}

#[test]
fn missing_config_fails() {
    let mut cmd = Command::cargo_bin("chart-palette").unwrap();
    cmd.args(["css", "--config", "/definitely/not/here.json"]);
    cmd.assert().failure();
}
