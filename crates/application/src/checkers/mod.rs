mod cname;
mod http;
mod ns;
mod registry;

pub use cname::CnameChecker;
pub use http::HttpChecker;
pub use ns::NsChecker;
pub use registry::{
    canonical_check_id, validate_check_ids, CheckerFactory, CheckerRegistry, BUILTIN_CHECKERS,
};

use crate::ports::{DnsQueryPort, FingerprintCatalogPort, HttpFetchPort};
use crate::services::ResultSink;
use async_trait::async_trait;
use ferrous_audit_domain::{Connectivity, DomainError, ResourceRecord, DNS_PORT};
use std::sync::Arc;

/// A detection algorithm run against every record of every zone.
#[async_trait]
pub trait Checker: Send + Sync {
    fn name(&self) -> &'static str;

    /// Called once before any record is checked.
    async fn init(&mut self) -> Result<(), DomainError>;

    /// Records the checker does not care about return `Ok(())` untouched.
    async fn check(&self, record: &ResourceRecord) -> Result<(), DomainError>;
}

/// Collaborators handed to every checker at construction.
#[derive(Clone)]
pub struct CheckerContext {
    pub dns: Arc<dyn DnsQueryPort>,
    pub http: Arc<dyn HttpFetchPort>,
    pub catalog: Arc<dyn FingerprintCatalogPort>,
    pub connectivity: Connectivity,
    pub sink: Arc<ResultSink>,
    /// Port used for direct queries to authoritative servers
    pub authority_port: u16,
}

impl CheckerContext {
    pub fn new(
        dns: Arc<dyn DnsQueryPort>,
        http: Arc<dyn HttpFetchPort>,
        catalog: Arc<dyn FingerprintCatalogPort>,
        connectivity: Connectivity,
        sink: Arc<ResultSink>,
    ) -> Self {
        Self {
            dns,
            http,
            catalog,
            connectivity,
            sink,
            authority_port: DNS_PORT,
        }
    }

    pub fn with_authority_port(mut self, port: u16) -> Self {
        self.authority_port = port;
        self
    }
}
