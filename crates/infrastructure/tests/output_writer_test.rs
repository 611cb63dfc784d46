use ferrous_audit_domain::{AuditResult, DomainError};
use ferrous_audit_infrastructure::output::JsonResultWriter;
use std::fs;

fn finding() -> AuditResult {
    AuditResult::new(
        "www.example.com.",
        "cname",
        "gone.example.net.",
        "Dangling CNAME www.example.com. -> gone.example.net.",
    )
}

#[test]
fn test_results_written_as_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    let writer = JsonResultWriter::open(&path.to_string_lossy()).unwrap();
    writer.write(&[finding()]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let entries = parsed.as_array().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "www.example.com.");
    assert_eq!(entries[0]["check"], "cname");
    assert_eq!(entries[0]["target"], "gone.example.net.");
    assert!(entries[0]["detected"].is_string());
}

#[test]
fn test_empty_scan_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    JsonResultWriter::open(&path.to_string_lossy())
        .unwrap()
        .write::<AuditResult>(&[])
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
}

#[test]
fn test_unwritable_destination_fails_on_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("report.json");

    let result = JsonResultWriter::open(&path.to_string_lossy());
    assert!(matches!(result, Err(DomainError::OutputError(_))));
}
