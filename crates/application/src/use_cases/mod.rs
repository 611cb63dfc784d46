mod audit_zones;
mod probe_connectivity;

pub use audit_zones::{AuditZonesUseCase, ScanSummary};
pub use probe_connectivity::{ProbeConnectivityUseCase, IPV4_PROBES, IPV6_PROBES};
