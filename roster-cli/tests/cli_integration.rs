//! CLI integration tests for roster

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated environment: empty config location and a fresh database path
fn setup_test_env() -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("data").join("roster.db");
    (temp_dir, db_path.to_string_lossy().to_string())
}

fn roster(temp_dir: &TempDir, db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("ROSTER_CONFIG", temp_dir.path().join("absent.toml"))
        .env_remove("ROSTER_DB")
        .env_remove("ROSTER_LOG_LEVEL")
        .env_remove("ROSTER_LOG_FORMAT")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(db_path);
    cmd
}

#[test]
fn test_help_flag_output() {
    let mut cmd = Command::cargo_bin("roster").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-student"))
        .stdout(predicate::str::contains("assign"))
        .stdout(predicate::str::contains("--db"));
}

#[test]
fn test_add_student_prints_sequential_ids() {
    let (temp_dir, db_path) = setup_test_env();

    roster(&temp_dir, &db_path)
        .args(["add-student", "Anna", "Berzina"])
        .assert()
        .success()
        .stdout("1\n");

    roster(&temp_dir, &db_path)
        .args(["add-student", "Janis", "Ozols"])
        .assert()
        .success()
        .stdout("2\n");

    roster(&temp_dir, &db_path)
        .arg("students")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Berzina Anna"))
        .stdout(predicate::str::contains("2 Ozols Janis"));
}

#[test]
fn test_invalid_input_exits_with_code_3() {
    let (temp_dir, db_path) = setup_test_env();

    roster(&temp_dir, &db_path)
        .args(["add-student", "R2", "D2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Name may only contain letters"));

    roster(&temp_dir, &db_path)
        .args(["add-class", "ten", "b"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Year may only contain digits"));
}

#[test]
fn test_assign_and_list_groups_as_json() {
    let (temp_dir, db_path) = setup_test_env();

    roster(&temp_dir, &db_path)
        .args(["add-student", "Anna", "Berzina"])
        .assert()
        .success();
    roster(&temp_dir, &db_path)
        .args(["add-student", "Janis", "Ozols"])
        .assert()
        .success();
    roster(&temp_dir, &db_path)
        .args(["assign", "2", "10", "b"])
        .assert()
        .success();

    let output = roster(&temp_dir, &db_path)
        .args(["groups", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let groups: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(groups[0]["student_id"], 1);
    assert!(groups[0]["year"].is_null());
    assert_eq!(groups[1]["year"], "10");
    assert_eq!(groups[1]["modifier"], "b");
}

#[test]
fn test_assign_to_unknown_student_fails() {
    let (temp_dir, db_path) = setup_test_env();

    roster(&temp_dir, &db_path)
        .args(["assign", "9", "10", "b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No group row for student 9"));
}

#[test]
fn test_classes_listing() {
    let (temp_dir, db_path) = setup_test_env();

    roster(&temp_dir, &db_path)
        .args(["add-class", " 9 ", "a"])
        .assert()
        .success()
        .stdout("1\n");

    roster(&temp_dir, &db_path)
        .arg("classes")
        .assert()
        .success()
        .stdout("1 9a\n");
}

#[test]
fn test_database_path_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("from-config.db");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[database]\npath = \"{}\"\n",
            db_path.to_string_lossy().replace('\\', "\\\\")
        ),
    )
    .unwrap();

    Command::cargo_bin("roster")
        .unwrap()
        .env_remove("ROSTER_DB")
        .arg("--config")
        .arg(&config_path)
        .args(["add-class", "10", "c"])
        .assert()
        .success();

    assert!(db_path.exists());
}

#[test]
fn test_log_level_from_environment() {
    let (temp_dir, db_path) = setup_test_env();

    roster(&temp_dir, &db_path)
        .env("ROSTER_LOG_LEVEL", "debug")
        .arg("students")
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("Database ready"));
}

#[test]
fn test_log_format_flag_overrides_environment() {
    let (temp_dir, db_path) = setup_test_env();

    let output = roster(&temp_dir, &db_path)
        .env("ROSTER_LOG_LEVEL", "debug")
        .env("ROSTER_LOG_FORMAT", "text")
        .args(["--log-format", "json", "students"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("expected log output");
    let event: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(event["level"].is_string());
}

#[test]
fn test_quiet_stderr_at_warn_level() {
    let (temp_dir, db_path) = setup_test_env();

    roster(&temp_dir, &db_path)
        .env("ROSTER_LOG_LEVEL", "warn")
        .arg("classes")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
