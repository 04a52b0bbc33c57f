/// End-to-end tests for config file loading and environment overrides.
///
/// Every `serve` case here fails before the listener is bound, so the process
/// exits on its own.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn store_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/atlas-store.json")
}

fn write_config(dir: &std::path::Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("federation-atlas.config.yml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_explicit_config_missing_file() {
    cargo_bin_cmd!("federation-atlas")
        .args(["serve", "--config", "/nonexistent/federation-atlas.config.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_explicit_config_invalid_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "server: [[[broken");

    cargo_bin_cmd!("federation-atlas")
        .arg("serve")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_discovered_config_is_validated() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "tree:\n  max_depth: 0\n");

    cargo_bin_cmd!("federation-atlas")
        .arg("serve")
        .current_dir(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("tree.max_depth must be at least 1"));
}

#[test]
fn test_invalid_log_level_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "logging:\n  level: chatty\n");

    cargo_bin_cmd!("federation-atlas")
        .arg("serve")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("logging.level 'chatty'"));
}

#[test]
fn test_unknown_field_warns_before_env_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        temp_dir.path(),
        "server:\n  port: 4000\nneo4j:\n  uri: bolt://localhost:7687\n",
    );

    cargo_bin_cmd!("federation-atlas")
        .arg("serve")
        .arg("--config")
        .arg(&config)
        .env("ATLAS_PORT", "not-a-port")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Unknown config field 'neo4j' will be ignored",
        ))
        .stderr(predicate::str::contains("ATLAS_PORT 'not-a-port'"));
}

#[test]
fn test_corrupt_store_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let store = temp_dir.path().join("atlas-store.json");
    fs::write(&store, "not json").unwrap();

    cargo_bin_cmd!("federation-atlas")
        .arg("serve")
        .current_dir(temp_dir.path())
        .env("ATLAS_STORE", &store)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read graph store"));
}

#[test]
fn test_tree_uses_discovered_depth_limit() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "tree:\n  max_depth: 1\n");

    cargo_bin_cmd!("federation-atlas")
        .args(["tree", "--host", "shell", "--no-color", "--store"])
        .arg(store_fixture())
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("└── checkout 1.0 [truncated]"))
        .stdout(predicate::str::contains("payments").not());
}

#[test]
fn test_tree_uses_explicit_node_limit() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "tree:\n  max_nodes: 2\n");

    cargo_bin_cmd!("federation-atlas")
        .args(["tree", "--host", "shell", "--no-color", "--store"])
        .arg(store_fixture())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("shell 1.1 [truncated]\n└── cart 1.0\n");
}

#[test]
fn test_tree_rejects_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "tree:\n  max_nodes: 0\n");

    cargo_bin_cmd!("federation-atlas")
        .args(["tree", "--host", "shell", "--store"])
        .arg(store_fixture())
        .current_dir(temp_dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("tree.max_nodes must be at least 1"));
}
