use async_trait::async_trait;
use ferrous_audit_domain::{DomainError, QueryResponse, RecordType};
use std::net::SocketAddr;

/// Outbound DNS operations used by the checkers and the connectivity prober.
///
/// `Ok` covers every answer the server produced, NXDOMAIN and SERVFAIL included;
/// `Err` is reserved for transport failures.
#[async_trait]
pub trait DnsQueryPort: Send + Sync {
    /// Recursion desired, sent to the next configured resolver in rotation.
    async fn recursive_query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<QueryResponse, DomainError>;

    /// Recursion cleared, sent straight to `server`.
    async fn direct_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<QueryResponse, DomainError>;

    /// Recursion desired, sent straight to `server`.
    async fn direct_recursive_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<QueryResponse, DomainError>;
}
