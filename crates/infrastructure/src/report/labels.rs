use super::{field_text, ReportEntry};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub count: usize,
    pub suffix: String,
}

/// Counts `cname` findings by the last `labels` labels of `field`, lowest
/// count first. Zero labels keeps the whole name.
pub fn summarize_labels(entries: &[ReportEntry], labels: usize, field: &str) -> Vec<LabelCount> {
    let mut counts: Vec<LabelCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        if field_text(entry, "check") != "cname" || !entry.contains_key(field) {
            continue;
        }

        let value = field_text(entry, field);
        let parts: Vec<&str> = value.trim_end_matches('.').split('.').collect();
        let skip = if labels == 0 {
            0
        } else {
            parts.len().saturating_sub(labels)
        };
        let suffix = parts[skip..].join(".");

        match index.get(&suffix) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(suffix.clone(), counts.len());
                counts.push(LabelCount { count: 1, suffix });
            }
        }
    }

    counts.sort_by_key(|c| c.count);
    counts
}
