use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record that was found dangling by one of the checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditResult {
    pub name: String,

    pub detected: DateTime<Utc>,

    pub check: String,

    pub target: String,

    pub description: String,
}

impl AuditResult {
    pub fn new(
        name: impl Into<String>,
        check: impl Into<String>,
        target: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            detected: Utc::now(),
            check: check.into(),
            target: target.into(),
            description: description.into(),
        }
    }
}
