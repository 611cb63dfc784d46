use crate::checkers::{canonical_check_id, Checker, CheckerRegistry};
use crate::ports::ZoneSource;
use ferrous_audit_domain::{DomainError, ResourceRecord};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub zones: usize,
    pub skipped_zones: usize,
    pub records: usize,
    pub check_errors: usize,
}

/// Drives every record of every zone through the active checkers.
pub struct AuditZonesUseCase {
    zone_source: Arc<dyn ZoneSource>,
    checkers: Vec<Box<dyn Checker>>,
}

impl std::fmt::Debug for AuditZonesUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditZonesUseCase")
            .field("checkers", &self.check_names())
            .finish()
    }
}

impl AuditZonesUseCase {
    /// Picks the configured checks out of `registry` and initializes each one.
    ///
    /// Fails on the first unknown identifier before anything is initialized,
    /// and on the first initialization failure. Repeated identifiers run once.
    pub async fn prepare(
        mut registry: CheckerRegistry,
        checks: &[String],
        zone_source: Arc<dyn ZoneSource>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        let mut ids = Vec::with_capacity(checks.len());
        for id in checks {
            let id = canonical_check_id(id);
            if !registry.contains(id) {
                return Err(DomainError::UnknownCheck(id.to_string()));
            }
            if seen.insert(id) {
                ids.push(id);
            }
        }

        let mut checkers = Vec::with_capacity(ids.len());
        for id in ids {
            let mut checker = registry
                .take(id)
                .ok_or_else(|| DomainError::UnknownCheck(id.to_string()))?;
            checker
                .init()
                .await
                .map_err(|e| DomainError::CheckerInit {
                    check: id.to_string(),
                    message: e.to_string(),
                })?;
            checkers.push(checker);
        }

        Ok(Self {
            zone_source,
            checkers,
        })
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    /// Runs every active checker on `record` in configured order.
    /// Returns the number of checkers that reported an error.
    pub async fn check_record(&self, record: &ResourceRecord) -> usize {
        let mut errors = 0;
        for checker in &self.checkers {
            if let Err(e) = checker.check(record).await {
                errors += 1;
                warn!(
                    record = %record.name,
                    check = checker.name(),
                    error = %e,
                    "Check failed"
                );
            }
        }
        errors
    }

    #[instrument(skip(self, sources), fields(sources = sources.len()))]
    pub async fn execute(&self, sources: &[String]) -> ScanSummary {
        let mut summary = ScanSummary::default();

        for source in sources {
            let zone = match self.zone_source.read_zone(source).await {
                Ok(zone) => zone,
                Err(e) => {
                    warn!(source = %source, error = %e, "Skipping unreadable zone");
                    summary.skipped_zones += 1;
                    continue;
                }
            };

            debug!(zone = %zone.name, records = zone.records.len(), "Scanning zone");
            summary.zones += 1;

            for record in &zone.records {
                summary.records += 1;
                summary.check_errors += self.check_record(record).await;
            }
        }

        info!(
            zones = summary.zones,
            skipped = summary.skipped_zones,
            records = summary.records,
            check_errors = summary.check_errors,
            "Scan complete"
        );
        summary
    }
}
