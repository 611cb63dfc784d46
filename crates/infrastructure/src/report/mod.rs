//! Post-processing of a finished JSON findings report.
//!
//! Entries are handled as plain JSON objects so fields added by other tools
//! survive a filter or merge untouched.

mod csv_export;
mod filter;
mod labels;
mod merge;

pub use csv_export::write_csv;
pub use filter::ReportFilter;
pub use labels::{summarize_labels, LabelCount};
pub use merge::merge_reports;

use ferrous_audit_domain::DomainError;
use serde_json::{Map, Value};
use std::fs;
use std::io::{self, Read};

pub type ReportEntry = Map<String, Value>;

/// Reads a report from `path`, or from standard input for `-`.
pub fn read_report(path: &str) -> Result<Vec<ReportEntry>, DomainError> {
    let content = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| DomainError::IoError(format!("stdin: {}", e)))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| DomainError::IoError(format!("{}: {}", path, e)))?
    };

    parse_report(&content, path)
}

pub fn parse_report(content: &str, source: &str) -> Result<Vec<ReportEntry>, DomainError> {
    serde_json::from_str(content)
        .map_err(|e| DomainError::ReportError(format!("{}: {}", source, e)))
}

/// Text of `field` for matching and export. Missing and null fields read as
/// empty; non-string values use their JSON form.
pub(crate) fn field_text(entry: &ReportEntry, field: &str) -> String {
    match entry.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
