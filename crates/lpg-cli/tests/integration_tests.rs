//! Integration tests for the `lpg` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PY_ADD: &str = "class Solution:\n    def add(self, a: int, b: int) -> int:\n        ";

const SNIPPETS: &str = r#"{
  "data": {
    "question": {
      "codeSnippets": [
        {"lang": "C", "langSlug": "c", "code": "int climbStairs(int n) {\n    \n}"},
        {"lang": "Go", "langSlug": "golang", "code": "func climbStairs(n int) int {\n    \n}"}
      ]
    }
  }
}"#;

/// `lpg` with HOME and the config directory pointed into `home`, so no
/// user configuration leaks into the test.
fn lpg(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lpg").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn pattern(temp: &TempDir) -> String {
    format!("{}/{{language_name}}", temp.path().display())
}

// ── meta ──────────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LeetCode"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── languages ─────────────────────────────────────────────────────────────────

#[test]
fn test_languages_lists_slugs() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("c"))
        .stdout(predicate::str::contains("golang"))
        .stdout(predicate::str::contains("python3"));
}

#[test]
fn test_languages_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let output = lpg(temp.path())
        .args(["languages", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let slugs: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["c", "golang", "python3"]);
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("add.py");
    fs::write(&source, PY_ADD).unwrap();

    lpg(temp.path())
        .args(["new", "--source-file"])
        .arg(&source)
        .args(["-l", "python3", "-d", &pattern(&temp), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("solution.py"))
        .stdout(predicate::str::contains("test.py"));

    assert!(!temp.path().join("Python3").exists());
}

#[test]
fn test_new_from_source_file() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("add.py");
    fs::write(&source, PY_ADD).unwrap();

    lpg(temp.path())
        .args(["new", "--source-file"])
        .arg(&source)
        .args(["-l", "py", "-d", &pattern(&temp)])
        .assert()
        .success();

    let project = temp.path().join("Python3").join("add");
    let harness = fs::read_to_string(project.join("test.py")).unwrap();
    assert!(harness.contains("result = Solution().add(a, b)"));
    assert!(project.join("solution.py").exists());
}

#[test]
fn test_new_from_problems_dir() {
    let temp = TempDir::new().unwrap();
    let snippets = temp.path().join("snippets");
    fs::create_dir(&snippets).unwrap();
    fs::write(snippets.join("climbing-stairs.json"), SNIPPETS).unwrap();

    lpg(temp.path())
        .args(["new", "-s", "climbing-stairs", "-l", "go", "--problems-dir"])
        .arg(&snippets)
        .args(["-d", &pattern(&temp)])
        .assert()
        .success();

    let project = temp.path().join("Go").join("climbing-stairs");
    let harness = fs::read_to_string(project.join("test.go")).unwrap();
    assert!(harness.contains("result := solution.ClimbStairs(n)"));
    assert!(project.join("go.mod").exists());
}

#[test]
fn test_existing_project_needs_force() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("add.py");
    fs::write(&source, PY_ADD).unwrap();
    let run = |force: bool| {
        let mut cmd = lpg(temp.path());
        cmd.args(["new", "--source-file"])
            .arg(&source)
            .args(["-l", "python3", "-d", &pattern(&temp)]);
        if force {
            cmd.arg("--force");
        }
        cmd.assert()
    };

    run(false).success();
    run(false)
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    run(true).success();
}

#[test]
fn test_unknown_language_exits_with_usage_error() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .args(["new", "-s", "two-sum", "-l", "cobol"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_template_without_signature_is_rejected() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("empty.c");
    fs::write(&source, "// nothing here\n").unwrap();

    lpg(temp.path())
        .args(["new", "--source-file"])
        .arg(&source)
        .args(["-l", "c", "-d", &pattern(&temp)])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Creating project failed"));

    assert!(!temp.path().join("C").exists());
}

#[test]
fn test_missing_problem_source_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .args(["new", "-s", "two-sum", "-d", &pattern(&temp)])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_missing_snippet_is_not_found() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .args(["new", "-s", "two-sum", "-l", "c", "--problems-dir"])
        .arg(temp.path())
        .args(["-d", &pattern(&temp)])
        .assert()
        .failure()
        .code(3);
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn test_config_get_default_language() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .args(["config", "get", "defaults.language"])
        .assert()
        .success()
        .stdout(predicate::str::diff("c\n"));
}

#[test]
fn test_config_file_sets_defaults() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("lpg.toml");
    fs::write(&config, "[defaults]\nlanguage = \"golang\"\n").unwrap();

    lpg(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "defaults.language"])
        .assert()
        .success()
        .stdout(predicate::str::diff("golang\n"));
}

#[test]
fn test_environment_overrides_config() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .env("LPG__DEFAULTS__GIT_INIT", "true")
        .args(["config", "get", "defaults.git_init"])
        .assert()
        .success()
        .stdout(predicate::str::diff("true\n"));
}

#[test]
fn test_init_writes_loadable_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("conf").join("lpg.toml");

    lpg(temp.path())
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    assert!(config.exists());

    lpg(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "defaults.directory"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{language_name}"));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn test_bash_completions() {
    let temp = TempDir::new().unwrap();
    lpg(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lpg"));
}
