use ferrous_audit_application::ports::FingerprintCatalogPort;
use ferrous_audit_domain::{DomainError, Fingerprint};
use tracing::debug;

const BUNDLED_CATALOG: &str = include_str!("fingerprints.json");

/// Fingerprint catalog compiled into the binary from fingerprints.json.
pub struct EmbeddedFingerprintCatalog {
    json: &'static str,
}

impl EmbeddedFingerprintCatalog {
    pub fn new() -> Self {
        Self {
            json: BUNDLED_CATALOG,
        }
    }

    /// Catalog backed by caller-supplied JSON instead of the bundled file.
    pub fn from_static(json: &'static str) -> Self {
        Self { json }
    }
}

impl Default for EmbeddedFingerprintCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FingerprintCatalogPort for EmbeddedFingerprintCatalog {
    fn load(&self) -> Result<Vec<Fingerprint>, DomainError> {
        let fingerprints = Fingerprint::compile_catalog(self.json)?;
        debug!(count = fingerprints.len(), "Fingerprint catalog loaded");
        Ok(fingerprints)
    }
}
