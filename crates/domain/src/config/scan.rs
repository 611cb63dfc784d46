use serde::{Deserialize, Serialize};

/// Checks run when none are selected, in this order.
pub const DEFAULT_CHECKS: &[&str] = &["cname", "ns", "http"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Check identifiers in execution order; empty selects `DEFAULT_CHECKS`
    #[serde(default)]
    pub checks: Vec<String>,

    /// Name queried for SOA when probing connectivity
    #[serde(default = "default_probe_domain")]
    pub probe_domain: String,
}

impl ScanConfig {
    pub fn effective_checks(&self) -> Vec<String> {
        if self.checks.is_empty() {
            DEFAULT_CHECKS.iter().map(|c| c.to_string()).collect()
        } else {
            self.checks.clone()
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            checks: Vec::new(),
            probe_domain: default_probe_domain(),
        }
    }
}

fn default_probe_domain() -> String {
    "example.com.".to_string()
}
