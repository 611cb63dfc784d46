//! ferrous-audit domain layer
pub mod audit_result;
pub mod config;
pub mod connectivity;
pub mod dns_protocol;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod fingerprint;
pub mod prefix_set;
pub mod query_response;
pub mod zone;

pub use audit_result::AuditResult;
pub use config::{CliOverrides, Config, ConfigError};
pub use connectivity::Connectivity;
pub use dns_protocol::{parse_resolver_addr, DnsProtocol, DNS_PORT};
pub use dns_query::{DnsQuery, EXTENDED_UDP_PAYLOAD};
pub use dns_record::{fqdn, names_equal, RecordData, RecordType, ResourceRecord, SoaData};
pub use errors::DomainError;
pub use fingerprint::{Fingerprint, FingerprintDefinition};
pub use prefix_set::PrefixSet;
pub use query_response::{LookupOutcome, QueryResponse, ResponseCode};
pub use zone::Zone;
