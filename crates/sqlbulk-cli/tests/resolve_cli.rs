//! CLI integration tests for table name resolution and config output.

use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::tempdir;

fn sqlbulk() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sqlbulk"))
}

#[test]
fn resolves_positional_names_as_json() {
    let output = sqlbulk()
        .args(["-f", "json", "--compact", "Orders", "[Sales].[Orders]"])
        .output()
        .expect("run CLI");

    assert!(output.status.success(), "CLI should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid json");
    assert_eq!(json["resolvedCount"], 2);
    assert_eq!(
        json["resolutions"][0]["term"]["qualifiedName"],
        "[dbo].[Orders]"
    );
    assert_eq!(
        json["resolutions"][1]["term"]["qualifiedName"],
        "[Sales].[Orders]"
    );
}

#[test]
fn unresolvable_name_exits_with_failure() {
    let output = sqlbulk()
        .args(["-f", "json", "Sales."])
        .output()
        .expect("run CLI");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("sqlbulk: warning: Sales.:"),
        "warning expected on stderr: {stderr}"
    );
}

#[test]
fn quiet_suppresses_warnings() {
    let output = sqlbulk()
        .args(["-f", "json", "--quiet", "."])
        .output()
        .expect("run CLI");

    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("warning"));
}

#[test]
fn resolves_entities_through_mappings_file() {
    let dir = tempdir().expect("temp dir");
    let mappings = dir.path().join("mappings.json");
    std::fs::write(
        &mappings,
        r#"{"Order": "[Sales].[Orders]", "Customer": "Customers"}"#,
    )
    .expect("write mappings");

    let output = sqlbulk()
        .args([
            "-f",
            "json",
            "-m",
            mappings.to_str().expect("mappings path"),
            "-e",
            "Order",
            "-e",
            "customer",
        ])
        .output()
        .expect("run CLI");

    assert!(output.status.success(), "CLI should succeed");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["resolutions"][0]["source"], "entity");
    assert_eq!(
        json["resolutions"][0]["term"]["qualifiedName"],
        "[Sales].[Orders]"
    );
    assert_eq!(
        json["resolutions"][1]["term"]["qualifiedName"],
        "[dbo].[Customers]"
    );
}

#[test]
fn unmapped_entity_is_reported() {
    let dir = tempdir().expect("temp dir");
    let mappings = dir.path().join("mappings.json");
    std::fs::write(&mappings, "{}").expect("write mappings");

    let output = sqlbulk()
        .args([
            "-f",
            "json",
            "--mappings",
            mappings.to_str().expect("mappings path"),
            "--entity",
            "Invoice",
        ])
        .output()
        .expect("run CLI");

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let error = json["resolutions"][0]["error"].as_str().expect("error text");
    assert!(error.contains("Invoice"), "{error}");
}

#[test]
fn missing_mappings_file_is_config_error() {
    let output = sqlbulk()
        .args(["-m", "/nonexistent/mappings.json", "-e", "Order"])
        .output()
        .expect("run CLI");

    assert_eq!(output.status.code(), Some(66));
    assert!(String::from_utf8_lossy(&output.stderr).contains("sqlbulk: error:"));
}

#[test]
fn reads_names_from_stdin() {
    let mut child = sqlbulk()
        .args(["-f", "json"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"Orders\n\nSales.Customers\n")
        .expect("write stdin");

    let output = child.wait_with_output().expect("wait CLI");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["resolvedCount"], 2);
    assert_eq!(
        json["resolutions"][1]["term"]["qualifiedName"],
        "[Sales].[Customers]"
    );
}

#[test]
fn table_output_is_default() {
    let output = sqlbulk().arg("a.b.c").output().expect("run CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Table Name Resolution"));
    assert!(stdout.contains("[a].[b]"));
}

#[test]
fn show_config_applies_config_file() {
    let dir = tempdir().expect("temp dir");
    let config = dir.path().join("bulk.json");
    std::fs::write(
        &config,
        r#"{"sqlBulkBatchSize": 5000, "sqlBulkCopyOptions": 0}"#,
    )
    .expect("write config");

    let output = sqlbulk()
        .args([
            "--config",
            config.to_str().expect("config path"),
            "--show-config",
            "-f",
            "json",
        ])
        .output()
        .expect("run CLI");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["sqlBulkBatchSize"], 5000);
    assert_eq!(json["sqlBulkCopyOptions"], 0);
    assert_eq!(json["materializedDataLoadingSchema"], "dbo_materializing");
}

#[test]
fn invalid_config_file_is_config_error() {
    let dir = tempdir().expect("temp dir");
    let config = dir.path().join("bulk.json");
    std::fs::write(&config, r#"{"sqlBulkBatchSize": 0}"#).expect("write config");

    let output = sqlbulk()
        .args(["--config", config.to_str().expect("config path"), "--show-config"])
        .output()
        .expect("run CLI");

    assert_eq!(output.status.code(), Some(66));
}

#[test]
fn prints_config_schema() {
    let output = sqlbulk()
        .arg("--config-schema")
        .output()
        .expect("run CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sqlBulkBatchSize"));
    assert!(stdout.contains("materializedDataDiscardingSchema"));
}

#[test]
fn writes_output_file() {
    let dir = tempdir().expect("temp dir");
    let out_path = dir.path().join("out.json");

    let output = sqlbulk()
        .args([
            "-f",
            "json",
            "-o",
            out_path.to_str().expect("out path"),
            "Orders",
        ])
        .output()
        .expect("run CLI");

    assert!(output.status.success());
    let written = std::fs::read_to_string(&out_path).expect("read output");
    assert!(written.contains("[dbo].[Orders]"));
}
