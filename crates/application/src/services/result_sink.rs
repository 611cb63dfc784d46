use ferrous_audit_domain::AuditResult;
use std::sync::Mutex;
use tracing::info;

/// Append-only collection of findings, shared by every checker.
#[derive(Debug, Default)]
pub struct ResultSink {
    results: Mutex<Vec<AuditResult>>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, result: AuditResult) {
        info!(
            name = %result.name,
            check = %result.check,
            target = %result.target,
            "{}",
            result.description
        );
        self.results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(result);
    }

    pub fn len(&self) -> usize {
        self.results.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the findings in insertion order.
    pub fn snapshot(&self) -> Vec<AuditResult> {
        self.results
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
