use super::{Checker, CheckerContext};
use async_trait::async_trait;
use ferrous_audit_domain::{AuditResult, DomainError, LookupOutcome, RecordData, RecordType, ResourceRecord};
use tracing::{debug, info};

/// Types that count as evidence the CNAME target still exists.
const TARGET_TYPES: [RecordType; 3] = [RecordType::A, RecordType::AAAA, RecordType::TXT];

/// Flags CNAME records whose target resolves to nothing.
pub struct CnameChecker {
    ctx: CheckerContext,
}

impl CnameChecker {
    pub fn new(ctx: CheckerContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Checker for CnameChecker {
    fn name(&self) -> &'static str {
        "cname"
    }

    async fn init(&mut self) -> Result<(), DomainError> {
        info!(check = "cname", "Initializing check");
        Ok(())
    }

    async fn check(&self, record: &ResourceRecord) -> Result<(), DomainError> {
        let RecordData::CNAME(target) = &record.data else {
            return Ok(());
        };

        debug!(record = %record.name, target = %target, check = "cname", "Checking record");

        let mut answers = 0usize;
        for record_type in TARGET_TYPES {
            let outcome = LookupOutcome::classify(
                self.ctx.dns.recursive_query(target, record_type).await,
                record_type,
            );
            if let LookupOutcome::TransportFailure(e) = &outcome {
                debug!(
                    record = %record.name,
                    target = %target,
                    record_type = %record_type,
                    error = %e,
                    "CNAME target lookup failed"
                );
            }
            answers += outcome.positive_count(record_type);
        }

        debug!(record = %record.name, answers, "Resolved CNAME target");

        if answers == 0 {
            self.ctx.sink.add(AuditResult::new(
                record.name.clone(),
                "cname",
                target.clone(),
                format!("Dangling CNAME {} -> {}", record.name, target),
            ));
        }

        Ok(())
    }
}
