use ferrous_audit_application::checkers::CheckerContext;
use ferrous_audit_application::services::ResultSink;
use ferrous_audit_application::use_cases::ProbeConnectivityUseCase;
use ferrous_audit_domain::{Config, Connectivity, DomainError};
use ferrous_audit_infrastructure::dns::ResolutionEngine;
use ferrous_audit_infrastructure::fingerprints::EmbeddedFingerprintCatalog;
use ferrous_audit_infrastructure::http::HttpFetcher;
use ferrous_audit_infrastructure::zonefile::ZoneFileReader;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Production adapters behind the application ports.
pub struct AuditServices {
    pub dns: Arc<ResolutionEngine>,
    pub http: Arc<HttpFetcher>,
    pub catalog: Arc<EmbeddedFingerprintCatalog>,
    pub zone_source: Arc<ZoneFileReader>,
    pub sink: Arc<ResultSink>,
}

impl AuditServices {
    pub fn new(config: &Config, resolvers: Vec<SocketAddr>) -> Result<Self, DomainError> {
        info!(resolvers = ?resolvers, "Initializing resolution engine");

        Ok(Self {
            dns: Arc::new(ResolutionEngine::new(
                resolvers,
                Duration::from_millis(config.dns.query_timeout_ms),
            )),
            http: Arc::new(HttpFetcher::new(&config.http)?),
            catalog: Arc::new(EmbeddedFingerprintCatalog::new()),
            zone_source: Arc::new(ZoneFileReader::new()),
            sink: Arc::new(ResultSink::new()),
        })
    }

    pub fn probe_connectivity(&self, config: &Config) -> ProbeConnectivityUseCase {
        ProbeConnectivityUseCase::new(
            self.dns.clone(),
            self.dns.resolvers().to_vec(),
            config.scan.probe_domain.clone(),
        )
    }

    pub fn checker_context(&self, config: &Config, connectivity: Connectivity) -> CheckerContext {
        CheckerContext::new(
            self.dns.clone(),
            self.http.clone(),
            self.catalog.clone(),
            connectivity,
            self.sink.clone(),
        )
        .with_authority_port(config.dns.port)
    }
}
