use ferrous_audit_domain::{Config, DomainError};
use ferrous_audit_infrastructure::system::ResolvConfReader;
use std::net::SocketAddr;
use tracing::{info, warn};

/// Configured resolvers, or the system's when none are configured.
pub async fn discover_resolvers(config: &Config) -> anyhow::Result<Vec<SocketAddr>> {
    let configured = config
        .dns
        .resolver_addrs()
        .map_err(DomainError::ConfigError)?;
    if !configured.is_empty() {
        return Ok(configured);
    }

    info!("No resolvers configured, reading system resolvers");
    let discovered = match ResolvConfReader::new().read_resolvers().await {
        Ok(resolvers) => resolvers,
        Err(e) => {
            warn!(error = %e, "System resolver discovery failed");
            Vec::new()
        }
    };

    if discovered.is_empty() {
        return Err(DomainError::NoResolvers.into());
    }
    Ok(discovered)
}
