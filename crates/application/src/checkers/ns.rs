use super::{Checker, CheckerContext};
use async_trait::async_trait;
use ferrous_audit_domain::{
    fqdn, names_equal, AuditResult, DomainError, RecordData, RecordType, ResourceRecord,
};
use std::net::{IpAddr, SocketAddr};
use tracing::{debug, info};

const ADDRESS_TYPES: [RecordType; 2] = [RecordType::A, RecordType::AAAA];

/// Flags lame delegations: nameservers that do not exist or do not serve the zone.
pub struct NsChecker {
    ctx: CheckerContext,
}

impl NsChecker {
    pub fn new(ctx: CheckerContext) -> Self {
        Self { ctx }
    }

    fn report(&self, record: &ResourceRecord, nameserver: &str, reason: &str) {
        self.ctx.sink.add(AuditResult::new(
            record.name.clone(),
            "ns",
            nameserver,
            format!("Dangling NS {} -> {}: {}", record.name, nameserver, reason),
        ));
    }

    /// Asks `server` for the SOA of the delegated zone without recursion.
    async fn probe_authority(&self, record: &ResourceRecord, nameserver: &str, server: IpAddr) {
        let zone = fqdn(&record.name);
        let addr = SocketAddr::new(server, self.ctx.authority_port);

        match self.ctx.dns.direct_query(&zone, RecordType::SOA, addr).await {
            Ok(response) => {
                let serves_zone = response.answers.iter().any(|answer| {
                    answer.record_type() == RecordType::SOA && names_equal(&answer.name, &zone)
                });
                debug!(zone = %zone, server = %server, serves_zone, "Authority probe answered");
                if !serves_zone {
                    self.report(record, nameserver, "Target NS doesn't answer for this name");
                }
            }
            Err(e) => {
                debug!(zone = %zone, server = %server, error = %e, "Authority probe failed");
                self.report(record, nameserver, "Target NS query failed");
            }
        }
    }
}

#[async_trait]
impl Checker for NsChecker {
    fn name(&self) -> &'static str {
        "ns"
    }

    async fn init(&mut self) -> Result<(), DomainError> {
        info!(check = "ns", "Initializing check");
        Ok(())
    }

    async fn check(&self, record: &ResourceRecord) -> Result<(), DomainError> {
        let RecordData::NS(nameserver) = &record.data else {
            return Ok(());
        };

        debug!(record = %record.name, nameserver = %nameserver, check = "ns", "Checking record");

        let mut resolved = 0usize;
        for record_type in ADDRESS_TYPES {
            let response = match self.ctx.dns.recursive_query(nameserver, record_type).await {
                Ok(response) => response,
                Err(e) => {
                    debug!(
                        record = %record.name,
                        nameserver = %nameserver,
                        record_type = %record_type,
                        error = %e,
                        "Nameserver lookup failed"
                    );
                    continue;
                }
            };

            let addresses = response
                .answers
                .iter()
                .filter(|answer| answer.record_type() == record_type)
                .filter_map(ResourceRecord::address);

            for address in addresses {
                if !self.ctx.connectivity.permits(address) {
                    info!(
                        record = %record.name,
                        nameserver = %nameserver,
                        address = %address,
                        "Skipping authority probe, no connectivity for this address family"
                    );
                    continue;
                }
                resolved += 1;
                self.probe_authority(record, nameserver, address).await;
            }
        }

        debug!(record = %record.name, nameserver = %nameserver, resolved, "Resolved nameserver");

        if resolved == 0 {
            self.report(record, nameserver, "Target NS name doesn't exist");
        }

        Ok(())
    }
}
