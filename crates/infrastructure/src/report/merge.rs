use super::{field_text, ReportEntry};
use std::collections::HashMap;

/// Folds several reports into one, keyed by name, check and target. A later
/// entry replaces an earlier one in place.
pub fn merge_reports(reports: Vec<Vec<ReportEntry>>) -> Vec<ReportEntry> {
    let mut merged: Vec<ReportEntry> = Vec::new();
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();

    for entry in reports.into_iter().flatten() {
        let key = (
            field_text(&entry, "name"),
            field_text(&entry, "check"),
            field_text(&entry, "target"),
        );
        match index.get(&key) {
            Some(&slot) => merged[slot] = entry,
            None => {
                index.insert(key, merged.len());
                merged.push(entry);
            }
        }
    }

    merged
}
