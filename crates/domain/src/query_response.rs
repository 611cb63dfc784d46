use crate::{DomainError, RecordType, ResourceRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

/// A decoded DNS answer. Created per query and dropped once inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    pub rcode: ResponseCode,
    pub truncated: bool,
    pub answers: Vec<ResourceRecord>,
}

impl QueryResponse {
    pub fn new(rcode: ResponseCode, answers: Vec<ResourceRecord>) -> Self {
        Self {
            rcode,
            truncated: false,
            answers,
        }
    }

    pub fn empty(rcode: ResponseCode) -> Self {
        Self::new(rcode, Vec::new())
    }

    /// Counts answers of `record_type` anywhere in the answer section; CNAME
    /// chains may put the terminal record after several aliases.
    pub fn count_of_type(&self, record_type: RecordType) -> usize {
        self.answers
            .iter()
            .filter(|answer| answer.record_type() == record_type)
            .count()
    }

    pub fn has_answer_of_type(&self, record_type: RecordType) -> bool {
        self.count_of_type(record_type) > 0
    }

    pub fn has_address(&self) -> bool {
        self.answers.iter().any(|answer| answer.address().is_some())
    }
}

/// Three-way result of a single lookup.
#[derive(Debug, Clone)]
pub enum LookupOutcome {
    Positive(QueryResponse),
    Negative(QueryResponse),
    TransportFailure(DomainError),
}

impl LookupOutcome {
    pub fn classify(result: Result<QueryResponse, DomainError>, wanted: RecordType) -> Self {
        match result {
            Ok(response) if response.has_answer_of_type(wanted) => Self::Positive(response),
            Ok(response) => Self::Negative(response),
            Err(e) => Self::TransportFailure(e),
        }
    }

    /// Number of answers of `wanted`; zero for negative and failed lookups.
    pub fn positive_count(&self, wanted: RecordType) -> usize {
        match self {
            Self::Positive(response) => response.count_of_type(wanted),
            Self::Negative(_) | Self::TransportFailure(_) => 0,
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }
}
