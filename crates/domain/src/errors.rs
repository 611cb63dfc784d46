use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport error talking to {server}: {message}")]
    TransportError { server: String, message: String },

    #[error("No resolvers configured")]
    NoResolvers,

    #[error("No zones specified")]
    NoZoneInput,

    #[error("Unknown check: {0}")]
    UnknownCheck(String),

    #[error("Check {check} failed to initialize: {message}")]
    CheckerInit { check: String, message: String },

    #[error("Fingerprint catalog error: {0}")]
    FingerprintCatalog(String),

    #[error("Invalid CIDR format: {0}")]
    InvalidCidr(String),

    #[error("Zone parse error: {0}")]
    ZoneParse(String),

    #[error("HTTP fetch failed for {url}: {message}")]
    HttpFetch { url: String, message: String },

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("Report error: {0}")]
    ReportError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for failures that leave a lookup inconclusive rather than negative.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::QueryTimeout
                | DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportError { .. }
                | DomainError::InvalidDnsResponse(_)
        )
    }
}
