use domain::resolv::stub::conf::ResolvConf;
use ferrous_audit_domain::DomainError;
use std::net::SocketAddr;
use tokio::fs;
use tracing::{debug, warn};

/// Reads the system's recursive resolvers from resolv.conf.
pub struct ResolvConfReader {
    path: String,
}

impl ResolvConfReader {
    pub fn new() -> Self {
        Self {
            path: "/etc/resolv.conf".to_string(),
        }
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub async fn read_resolvers(&self) -> Result<Vec<SocketAddr>, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", self.path, e))
        })?;

        let resolvers = Self::parse(&content);
        debug!(path = %self.path, count = resolvers.len(), "System resolvers loaded");
        Ok(resolvers)
    }

    /// Returns the `nameserver` addresses in file order. A syntax error ends
    /// the scan; servers listed before it are kept.
    pub fn parse(content: &str) -> Vec<SocketAddr> {
        let mut conf = ResolvConf::new();
        if let Err(e) = conf.parse(&mut content.as_bytes()) {
            warn!(error = %e, kept = conf.servers.len(), "resolv.conf parse stopped early");
        }

        let mut resolvers: Vec<SocketAddr> = Vec::with_capacity(conf.servers.len());
        for server in &conf.servers {
            if !resolvers.contains(&server.addr) {
                resolvers.push(server.addr);
            }
        }
        resolvers
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}
