use super::{field_text, ReportEntry};
use fancy_regex::Regex;
use ferrous_audit_domain::DomainError;

/// Keeps entries whose fields all match their patterns (unanchored search).
/// Fields without a pattern match anything.
#[derive(Debug, Default)]
pub struct ReportFilter {
    patterns: Vec<(String, Regex)>,
    invert: bool,
}

impl ReportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, field: &str, pattern: &str) -> Result<Self, DomainError> {
        let regex = Regex::new(pattern).map_err(|e| {
            DomainError::ReportError(format!("Invalid pattern for {}: {}", field, e))
        })?;
        self.patterns.push((field.to_string(), regex));
        Ok(self)
    }

    /// Keeps the entries that do not match instead.
    pub fn inverted(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn matches(&self, entry: &ReportEntry) -> Result<bool, DomainError> {
        for (field, regex) in &self.patterns {
            let hit = regex
                .is_match(&field_text(entry, field))
                .map_err(|e| DomainError::ReportError(format!("Matching {}: {}", field, e)))?;
            if !hit {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn apply(&self, entries: Vec<ReportEntry>) -> Result<Vec<ReportEntry>, DomainError> {
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if self.matches(&entry)? != self.invert {
                kept.push(entry);
            }
        }
        Ok(kept)
    }
}
