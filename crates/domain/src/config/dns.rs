use crate::dns_protocol::parse_resolver_addr;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Recursive resolvers, `IP` or `IP:port`. Empty means use the system's.
    #[serde(default)]
    pub resolvers: Vec<String>,

    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,

    /// Port used for direct queries to authoritative servers
    #[serde(default = "default_port")]
    pub port: u16,
}

impl DnsConfig {
    pub fn resolver_addrs(&self) -> Result<Vec<SocketAddr>, String> {
        self.resolvers
            .iter()
            .map(|r| parse_resolver_addr(r))
            .collect()
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            resolvers: Vec::new(),
            query_timeout_ms: default_query_timeout(),
            port: default_port(),
        }
    }
}

fn default_query_timeout() -> u64 {
    3000
}

fn default_port() -> u16 {
    53
}
