use ferrous_audit_domain::{DomainError, Fingerprint};

pub trait FingerprintCatalogPort: Send + Sync {
    fn load(&self) -> Result<Vec<Fingerprint>, DomainError>;
}
