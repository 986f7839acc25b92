use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Return a `Command` for the `provider-resolve` binary built by Cargo.
///
/// `ANTHROPIC_API_KEY` and `RUST_LOG` are cleared so the runner's own
/// environment cannot leak into assertions.
fn provider_resolve() -> Command {
    let mut cmd = cargo_bin_cmd!("provider-resolve");
    cmd.env_remove("ANTHROPIC_API_KEY").env_remove("RUST_LOG");
    cmd
}

/// Write a config file into a fresh temp dir.
/// Returns the TempDir (for lifetime) and the path to the file.
fn make_config(file_name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(file_name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

// ── Global flags ────────────────────────────────────────────────────

#[test]
fn help_flag() {
    provider_resolve()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resolve the active LLM provider"));
}

#[test]
fn version_flag() {
    provider_resolve()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn about_flag() {
    provider_resolve()
        .arg("--about")
        .assert()
        .success()
        .stdout(predicate::str::contains("provider-resolve:"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("licence:"));
}

#[test]
fn no_args_shows_usage() {
    provider_resolve()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ── resolve ─────────────────────────────────────────────────────────

#[test]
fn resolve_openrouter_over_anthropic() {
    let (_dir, path) = make_config(
        "config.json",
        r#"{"providers": {
            "openrouter": {"apiKey": "sk-or-test-key", "apiBase": "https://openrouter.ai/api/v1"},
            "anthropic": {"apiKey": "sk-ant-test-key"}
        }}"#,
    );
    provider_resolve()
        .args(["resolve", "--config", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slot:          openrouter"))
        .stdout(predicate::str::contains("is_openrouter: true"))
        .stdout(predicate::str::contains("https://openrouter.ai/api/v1"))
        .stdout(predicate::str::contains("sk-or-test-key").not());
}

#[test]
fn resolve_yaml_vllm_json_output() {
    let (_dir, path) = make_config(
        "config.yaml",
        "agents:\n  defaults:\n    model: llama-3\nproviders:\n  vllm:\n    api_key: dummy\n    api_base: http://localhost:8000/v1\n",
    );
    let output = provider_resolve()
        .args(["resolve", "--config", path.to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["slot"], "vllm");
    assert_eq!(v["kind"], "vllm");
    assert_eq!(v["is_vllm"], true);
    assert_eq!(v["api_key"], "***");
    assert_eq!(v["model"], "hosted_vllm/llama-3");
}

#[test]
fn resolve_model_override() {
    let (_dir, path) = make_config(
        "config.json",
        r#"{"providers": {"openrouter": {"apiKey": "sk-or-test-key"}}}"#,
    );
    provider_resolve()
        .args([
            "resolve",
            "--config",
            path.to_str().unwrap(),
            "--model",
            "openai/gpt-4o",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Routed model:  openrouter/openai/gpt-4o"));
}

#[test]
fn resolve_base_without_key_is_unconfigured() {
    let (_dir, path) = make_config(
        "config.json",
        r#"{"providers": {"anthropic": {"apiKey": "", "apiBase": "https://custom-anthropic.example.com"}}}"#,
    );
    provider_resolve()
        .args(["resolve", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no provider configured"));
}

#[test]
fn resolve_missing_config_is_unconfigured() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    provider_resolve()
        .args(["resolve", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no provider configured"));
}

#[test]
fn resolve_invalid_config_reports_error() {
    let (_dir, path) = make_config("config.json", "{not json");
    provider_resolve()
        .args(["resolve", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn resolve_verbose_logs_active_slot() {
    let (_dir, path) = make_config(
        "config.json",
        r#"{"providers": {"anthropic": {"apiKey": "sk-ant-test-key"}}}"#,
    );
    provider_resolve()
        .args(["resolve", "--verbose", "--config", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("is_anthropic:  true"))
        .stderr(predicate::str::contains("resolved active provider"))
        .stderr(predicate::str::contains("sk-ant-test-key").not());
}

// ── classify ────────────────────────────────────────────────────────

#[test]
fn classify_anthropic_key() {
    provider_resolve()
        .args([
            "classify",
            "--api-key",
            "sk-ant-test123",
            "--model",
            "anthropic/claude-sonnet-4-5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind:          anthropic"))
        .stdout(predicate::str::contains("is_openrouter: false"))
        .stdout(predicate::str::contains("is_vllm:       false"));
}

#[test]
fn classify_vllm_base() {
    provider_resolve()
        .args([
            "classify",
            "--api-key",
            "dummy-key",
            "--api-base",
            "http://localhost:8000/v1",
            "--model",
            "claude-sonnet-4-5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind:          vllm"))
        .stdout(predicate::str::contains("is_anthropic:  false"));
}

#[test]
fn classify_generic_json() {
    let output = provider_resolve()
        .args([
            "classify",
            "--api-key",
            "plain",
            "--model",
            "gpt-4o",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["kind"], "generic");
    assert_eq!(v["is_anthropic"], false);
    assert_eq!(v["is_openrouter"], false);
    assert_eq!(v["is_vllm"], false);
    assert!(v.get("slot").is_none());
}

#[test]
fn classify_requires_api_key() {
    provider_resolve()
        .args(["classify", "--model", "gpt-4o"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-key"));
}

// ── rules ───────────────────────────────────────────────────────────

#[test]
fn rules_lists_precedence() {
    provider_resolve()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. openrouter"))
        .stdout(predicate::str::contains("2. anthropic"))
        .stdout(predicate::str::contains("3. vllm"))
        .stdout(predicate::str::contains("4. generic"));
}
