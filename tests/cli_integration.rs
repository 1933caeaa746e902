// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Integration tests for the affinity-poet CLI commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a corpus file into a temp directory
fn write_corpus(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("corpus.txt");
    fs::write(&path, text).unwrap();
    path
}

/// Command with an isolated, empty config file
fn poet_cmd(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();
    let mut cmd = Command::cargo_bin("affinity-poet").unwrap();
    cmd.env("AFFINITY_POET_CONFIG", &config).env_remove("RUST_LOG");
    cmd
}

const MUGAR: &str = "This is a test of the Mugar Omni Theater sound system.";

#[test]
fn test_poem_from_args() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir, MUGAR);

    poet_cmd(&dir)
        .arg("poem")
        .arg("--corpus")
        .arg(&corpus)
        .arg("Test the system.")
        .assert()
        .success()
        .stdout("Test of the system.\n");
}

#[test]
fn test_poem_from_stdin() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir, MUGAR);

    poet_cmd(&dir)
        .arg("poem")
        .arg("--corpus")
        .arg(&corpus)
        .write_stdin("Test the\nsystem.\n")
        .assert()
        .success()
        .stdout("Test of the system.\n");
}

#[test]
fn test_poem_json() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir, MUGAR);

    let output = poet_cmd(&dir)
        .args(["--json", "poem", "--metric", "min", "--corpus"])
        .arg(&corpus)
        .arg("Test the system.")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["poem"], "Test of the system.");
    assert_eq!(report["metric"], "min");
    assert_eq!(report["bridges"][0]["word"], "of");
    assert_eq!(report["bridges"][0]["after"], 0);
}

#[test]
fn test_metric_from_config_file() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir, MUGAR);
    let config = dir.path().join("custom.toml");
    fs::write(&config, "metric = \"product\"\n").unwrap();

    let output = poet_cmd(&dir)
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .args(["poem", "--corpus"])
        .arg(&corpus)
        .arg("Test the")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["metric"], "product");
    assert_eq!(report["bridges"][0]["score"], 1);
}

#[test]
fn test_metric_from_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir, MUGAR);
    let config = dir.path().join("custom.toml");
    fs::write(&config, "metric = \"min\"\n").unwrap();

    for config_args in [vec![], vec!["--config".to_string(), config.display().to_string()]] {
        let output = poet_cmd(&dir)
            .env("AFFINITY_POET_METRIC", "product")
            .arg("--json")
            .args(&config_args)
            .args(["poem", "--corpus"])
            .arg(&corpus)
            .arg("Test the")
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["metric"], "product");
    }
}

#[test]
fn test_unknown_metric_is_rejected() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir, MUGAR);

    poet_cmd(&dir)
        .args(["poem", "--metric", "median", "--corpus"])
        .arg(&corpus)
        .arg("Test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown bridge metric"));
}

#[test]
fn test_missing_corpus_fails() {
    let dir = TempDir::new().unwrap();

    poet_cmd(&dir)
        .args(["poem", "--corpus"])
        .arg(dir.path().join("nope.txt"))
        .arg("Test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read corpus"));
}

#[test]
fn test_export_dot() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir, MUGAR);

    poet_cmd(&dir)
        .args(["export", "--corpus"])
        .arg(&corpus)
        .assert()
        .success()
        .stdout(predicate::str::contains("digraph affinity"))
        .stdout(predicate::str::contains("\"test\" -> \"of\" [label=\"1\"];"));
}

#[test]
fn test_export_json_to_file() {
    let dir = TempDir::new().unwrap();
    let corpus = write_corpus(&dir, "a b a b");
    let out = dir.path().join("graph.json");

    poet_cmd(&dir)
        .args(["export", "--format", "json", "--corpus"])
        .arg(&corpus)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let graph: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(graph["vertices"], serde_json::json!(["a", "b"]));
    assert_eq!(graph["edges"][0]["source"], "a");
    assert_eq!(graph["edges"][0]["weight"], 2);
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();

    poet_cmd(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("affinity-poet"));
}
