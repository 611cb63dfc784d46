use super::exchange::QueryExchange;
use super::rotation::ResolverRotation;
use crate::dns::transport::{NetworkConnector, TransportConnector};
use async_trait::async_trait;
use ferrous_audit_application::ports::DnsQueryPort;
use ferrous_audit_domain::{DnsQuery, DomainError, QueryResponse, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// Sends every query the scan needs. No caching; the only retry is the
/// truncation fallback inside `QueryExchange`.
pub struct ResolutionEngine<C: TransportConnector = NetworkConnector> {
    exchange: QueryExchange<C>,
    rotation: ResolverRotation,
}

impl ResolutionEngine<NetworkConnector> {
    pub fn new(resolvers: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self::with_connector(Arc::new(NetworkConnector), resolvers, timeout)
    }
}

impl<C: TransportConnector> ResolutionEngine<C> {
    pub fn with_connector(connector: Arc<C>, resolvers: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self {
            exchange: QueryExchange::new(connector, timeout),
            rotation: ResolverRotation::new(resolvers),
        }
    }

    pub fn resolvers(&self) -> &[SocketAddr] {
        self.rotation.resolvers()
    }
}

#[async_trait]
impl<C: TransportConnector + 'static> DnsQueryPort for ResolutionEngine<C> {
    #[instrument(skip(self), level = "debug")]
    async fn recursive_query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<QueryResponse, DomainError> {
        let server = self.rotation.next().ok_or(DomainError::NoResolvers)?;
        self.exchange
            .exchange(&DnsQuery::new(name, record_type), server)
            .await
    }

    #[instrument(skip(self), level = "debug")]
    async fn direct_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<QueryResponse, DomainError> {
        self.exchange
            .exchange(&DnsQuery::non_recursive(name, record_type), server)
            .await
    }

    #[instrument(skip(self), level = "debug")]
    async fn direct_recursive_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<QueryResponse, DomainError> {
        self.exchange
            .exchange(&DnsQuery::new(name, record_type), server)
            .await
    }
}
