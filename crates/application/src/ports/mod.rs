mod dns_query_port;
mod fingerprint_catalog_port;
mod http_fetch_port;
mod zone_source;

pub use dns_query_port::DnsQueryPort;
pub use fingerprint_catalog_port::FingerprintCatalogPort;
pub use http_fetch_port::HttpFetchPort;
pub use zone_source::ZoneSource;
