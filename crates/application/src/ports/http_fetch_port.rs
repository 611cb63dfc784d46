use async_trait::async_trait;
use ferrous_audit_domain::DomainError;

#[async_trait]
pub trait HttpFetchPort: Send + Sync {
    /// Single GET, body returned as text regardless of status code.
    async fn fetch(&self, url: &str) -> Result<String, DomainError>;
}
