//! CLI integration tests
//!
//! Run the `persona` binary against a temporary database file.

use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn setup_db(temp_dir: &TempDir) -> PathBuf {
    let db_path = temp_dir.path().join("people.db");
    let mut conn = Connection::open(&db_path).unwrap();
    persona_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute_batch(
        r#"
        INSERT INTO people (kind, name, monthly_income) VALUES ('C', 'Maria', '3200.50');
        INSERT INTO people (kind, name, salary, job_title) VALUES ('F', 'Ana', '5000.00', 'Engineer');
        INSERT INTO people (kind, name) VALUES ('P', 'Joao');
        "#,
    )
    .unwrap();

    db_path
}

fn persona(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_persona"))
        .current_dir(dir)
        .env_remove("PERSONA_DATABASE_URL")
        .env_remove("PERSONA_DISCRIMINATOR_PERSON")
        .env_remove("PERSONA_DISCRIMINATOR_CUSTOMER")
        .env_remove("PERSONA_DISCRIMINATOR_EMPLOYEE")
        .env("PERSONA_LOG_PROFILE", "test")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_customers() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_db(&temp_dir);

    let output = persona(
        temp_dir.path(),
        &["customers", "--db", db_path.to_str().unwrap()],
    );

    assert_eq!(stdout(&output), "Maria - 3200.50\n");
}

#[test]
fn test_cli_employees() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_db(&temp_dir);

    let output = persona(
        temp_dir.path(),
        &["employees", "--db", db_path.to_str().unwrap()],
    );

    assert_eq!(stdout(&output), "Ana - Engineer - 5000.00\n");
}

#[test]
fn test_cli_people_literal_and_precise() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_db(&temp_dir);
    let db = db_path.to_str().unwrap();

    let literal = stdout(&persona(temp_dir.path(), &["people", "--db", db]));
    assert_eq!(
        literal,
        "Maria\n - is a customer\nAna\n - is a supplier\nJoao\n - is a supplier\n"
    );

    let precise = stdout(&persona(temp_dir.path(), &["people", "--precise", "--db", db]));
    assert_eq!(
        precise,
        "Maria\n - is a customer\nAna\n - is an employee\nJoao\n - is a person\n"
    );
}

#[test]
fn test_cli_database_url_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_db(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_persona"))
        .current_dir(temp_dir.path())
        .env("PERSONA_DATABASE_URL", format!("sqlite://{}", db_path.display()))
        .env("PERSONA_LOG_PROFILE", "test")
        .arg("customers")
        .output()
        .expect("Failed to execute CLI");

    assert_eq!(stdout(&output), "Maria - 3200.50\n");
}

#[test]
fn test_cli_seed_import_then_report() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("people.db");
    let seed_path = temp_dir.path().join("seed.yaml");
    fs::write(
        &seed_path,
        r#"
schema_version: 0
people:
  - kind: customer
    name: Maria
    monthly_income: "1200.50"
  - kind: employee
    name: Ana
    salary: "5000.00"
    job_title: Engineer
"#,
    )
    .unwrap();
    let db = db_path.to_str().unwrap();

    let imported = stdout(&persona(
        temp_dir.path(),
        &["seed", "import", seed_path.to_str().unwrap(), "--db", db],
    ));
    assert!(imported.starts_with("Imported 2 people"));

    let customers = stdout(&persona(temp_dir.path(), &["customers", "--db", db]));
    assert_eq!(customers, "Maria - 1200.50\n");
}

#[test]
fn test_cli_error_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let bogus = temp_dir.path().join("bogus.db");
    fs::write(&bogus, "not a sqlite database\n".repeat(200)).unwrap();

    let output = persona(
        temp_dir.path(),
        &["customers", "--db", bogus.to_str().unwrap()],
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_CONNECTION]"), "stderr: {}", stderr);
}

#[test]
fn test_cli_report_on_missing_database_fails_without_creating_it() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("peple.db");

    let output = persona(
        temp_dir.path(),
        &["customers", "--db", missing.to_str().unwrap()],
    );

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_CONNECTION]"), "stderr: {}", stderr);
    assert!(!missing.exists());
}

#[test]
fn test_cli_rejects_bad_discriminator_config() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_db(&temp_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_persona"))
        .current_dir(temp_dir.path())
        .env("PERSONA_DISCRIMINATOR_CUSTOMER", "P")
        .env("PERSONA_LOG_PROFILE", "test")
        .args(["customers", "--db", db_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_CONFIG"));
}
