use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MULTISTORE_CONFIG: &str = r#"
features = ["multistore", "alias_search"]

[logging]
level = "warn"

[multistore.default_context]
scope = "shop_group"
id = 2

[[search.aliases]]
alias = "tshirt"
search = "t-shirt"

[[search.aliases]]
alias = "teeshirt"
search = "t-shirt"

[[search.aliases]]
alias = "bloose"
search = "blouse"
"#;

fn shopdesk(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shopdesk").expect("binary is built");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn with_config() -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("multistore.toml");
    fs::write(&path, MULTISTORE_CONFIG).expect("config written");
    (dir, path.display().to_string())
}

#[test]
fn single_shop_without_multistore_is_allowed() {
    let dir = tempfile::tempdir().expect("temp dir");
    shopdesk(dir.path())
        .args(["can-change", "--context", "single"])
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed in shop:1"));
}

#[test]
fn all_shops_context_is_allowed_with_multistore() {
    let dir = tempfile::tempdir().expect("temp dir");
    shopdesk(dir.path())
        .args(["can-change", "--multistore", "--context", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("allowed in all_shops"));
}

#[test]
fn single_shop_with_multistore_is_denied() {
    let dir = tempfile::tempdir().expect("temp dir");
    shopdesk(dir.path())
        .args(["can-change", "--multistore", "--context", "single", "--id", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Access denied"));
}

#[test]
fn shop_group_context_is_denied() {
    let dir = tempfile::tempdir().expect("temp dir");
    shopdesk(dir.path())
        .args(["can-change", "--context", "group"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shop_group:1"));
}

#[test]
fn configured_default_context_is_used() {
    let (dir, config) = with_config();
    shopdesk(dir.path())
        .args(["--config", &config, "can-change"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shop_group:2"));
}

#[test]
fn alias_search_prints_matching_terms() {
    let (dir, config) = with_config();
    shopdesk(dir.path())
        .args(["--config", &config, "aliases", "search", "shirt"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"searchTerms\":[\"t-shirt\"]}\n"));
}

#[test]
fn alias_search_without_match_prints_empty_terms() {
    let (dir, config) = with_config();
    shopdesk(dir.path())
        .args(["--config", &config, "aliases", "search", "boots", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"searchTerms\":[]}\n"));
}

#[test]
fn blank_alias_query_fails() {
    let (dir, config) = with_config();
    shopdesk(dir.path())
        .args(["--config", &config, "aliases", "search", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search term cannot be empty"));
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    shopdesk(dir.path())
        .args(["--config", "absent.toml", "can-change"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
