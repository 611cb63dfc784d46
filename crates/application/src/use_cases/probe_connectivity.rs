use crate::ports::DnsQueryPort;
use ferrous_audit_domain::{Connectivity, RecordType, DNS_PORT};
use futures::future::join_all;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, info};

/// Cloudflare, Google and Quad9 public resolvers.
pub const IPV4_PROBES: [Ipv4Addr; 6] = [
    Ipv4Addr::new(1, 1, 1, 1),
    Ipv4Addr::new(1, 0, 0, 1),
    Ipv4Addr::new(8, 8, 8, 8),
    Ipv4Addr::new(8, 8, 4, 4),
    Ipv4Addr::new(9, 9, 9, 9),
    Ipv4Addr::new(149, 112, 112, 112),
];

pub const IPV6_PROBES: [Ipv6Addr; 6] = [
    Ipv6Addr::new(0x2606, 0x4700, 0x4700, 0, 0, 0, 0, 0x1111),
    Ipv6Addr::new(0x2606, 0x4700, 0x4700, 0, 0, 0, 0, 0x1001),
    Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8888),
    Ipv6Addr::new(0x2001, 0x4860, 0x4860, 0, 0, 0, 0, 0x8844),
    Ipv6Addr::new(0x2620, 0xfe, 0, 0, 0, 0, 0, 0xfe),
    Ipv6Addr::new(0x2620, 0xfe, 0, 0, 0, 0, 0, 0x9),
];

/// Determines, once per run, which network paths can be trusted.
pub struct ProbeConnectivityUseCase {
    dns: Arc<dyn DnsQueryPort>,
    probe_domain: String,
    ipv4: Vec<SocketAddr>,
    ipv6: Vec<SocketAddr>,
    resolvers: Vec<SocketAddr>,
}

impl ProbeConnectivityUseCase {
    pub fn new(
        dns: Arc<dyn DnsQueryPort>,
        resolvers: Vec<SocketAddr>,
        probe_domain: impl Into<String>,
    ) -> Self {
        Self {
            dns,
            probe_domain: probe_domain.into(),
            ipv4: IPV4_PROBES
                .iter()
                .map(|ip| SocketAddr::new(IpAddr::V4(*ip), DNS_PORT))
                .collect(),
            ipv6: IPV6_PROBES
                .iter()
                .map(|ip| SocketAddr::new(IpAddr::V6(*ip), DNS_PORT))
                .collect(),
            resolvers,
        }
    }

    /// Replaces the public probe sets.
    pub fn with_probe_sets(mut self, ipv4: Vec<SocketAddr>, ipv6: Vec<SocketAddr>) -> Self {
        self.ipv4 = ipv4;
        self.ipv6 = ipv6;
        self
    }

    pub async fn execute(&self) -> Connectivity {
        let connectivity = Connectivity {
            ipv4: self.probe_set("ipv4", &self.ipv4).await,
            ipv6: self.probe_set("ipv6", &self.ipv6).await,
            resolvers: self.probe_set("resolvers", &self.resolvers).await,
        };

        info!(%connectivity, "Connectivity probed");
        connectivity
    }

    /// True only if every server in the set answered with an SOA.
    async fn probe_set(&self, set: &str, servers: &[SocketAddr]) -> bool {
        let results = join_all(servers.iter().map(|server| self.probe(*server))).await;
        let succeeded = results.iter().filter(|ok| **ok).count();

        debug!(set, succeeded, total = servers.len(), "Probe set finished");
        succeeded == servers.len()
    }

    async fn probe(&self, server: SocketAddr) -> bool {
        match self
            .dns
            .direct_recursive_query(&self.probe_domain, RecordType::SOA, server)
            .await
        {
            Ok(response) => {
                let found = response.has_answer_of_type(RecordType::SOA);
                debug!(target = %server, result = found, "Tested connectivity");
                found
            }
            Err(e) => {
                debug!(target = %server, error = %e, "Connectivity probe failed");
                false
            }
        }
    }
}
