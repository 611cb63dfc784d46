use crate::RecordType;
use std::sync::Arc;

/// EDNS(0) UDP payload advertised when a truncated answer is retried.
pub const EXTENDED_UDP_PAYLOAD: u16 = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub recursion_desired: bool,
    pub edns_payload: Option<u16>,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            recursion_desired: true,
            edns_payload: None,
        }
    }

    /// Query sent straight to an authority, asking it to answer from its own data.
    pub fn non_recursive(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            recursion_desired: false,
            ..Self::new(domain, record_type)
        }
    }

    pub fn with_edns(&self, payload: u16) -> Self {
        Self {
            edns_payload: Some(payload),
            ..self.clone()
        }
    }
}
