use async_trait::async_trait;
use ferrous_audit_domain::{DomainError, Zone};

#[async_trait]
pub trait ZoneSource: Send + Sync {
    /// Reads every record of the zone identified by `source`, in source order.
    async fn read_zone(&self, source: &str) -> Result<Zone, DomainError>;
}
