#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_audit_application::checkers::{Checker, CheckerContext};
use ferrous_audit_application::ports::{
    DnsQueryPort, FingerprintCatalogPort, HttpFetchPort, ZoneSource,
};
use ferrous_audit_application::services::ResultSink;
use ferrous_audit_domain::{
    Connectivity, DomainError, Fingerprint, FingerprintDefinition, QueryResponse, RecordData,
    RecordType, ResourceRecord, ResponseCode, SoaData, Zone,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Recursive,
    Direct,
    DirectRecursive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedQuery {
    pub kind: QueryKind,
    pub name: String,
    pub record_type: RecordType,
    pub server: Option<SocketAddr>,
}

type ScriptKey = (QueryKind, String, RecordType, Option<SocketAddr>);

/// Scripted DNS port. Unscripted queries answer NXDOMAIN.
#[derive(Default)]
pub struct MockDnsQuery {
    script: Mutex<HashMap<ScriptKey, Result<QueryResponse, DomainError>>>,
    calls: Mutex<Vec<RecordedQuery>>,
}

impl MockDnsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_recursive(
        &self,
        name: &str,
        record_type: RecordType,
        result: Result<QueryResponse, DomainError>,
    ) {
        self.script.lock().unwrap().insert(
            (QueryKind::Recursive, name.to_string(), record_type, None),
            result,
        );
    }

    pub fn on_direct(
        &self,
        name: &str,
        record_type: RecordType,
        server: &str,
        result: Result<QueryResponse, DomainError>,
    ) {
        self.script.lock().unwrap().insert(
            (
                QueryKind::Direct,
                name.to_string(),
                record_type,
                Some(server.parse().unwrap()),
            ),
            result,
        );
    }

    pub fn on_direct_recursive(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
        result: Result<QueryResponse, DomainError>,
    ) {
        self.script.lock().unwrap().insert(
            (QueryKind::DirectRecursive, name.to_string(), record_type, Some(server)),
            result,
        );
    }

    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_of(&self, kind: QueryKind) -> Vec<RecordedQuery> {
        self.calls().into_iter().filter(|c| c.kind == kind).collect()
    }

    fn answer(
        &self,
        kind: QueryKind,
        name: &str,
        record_type: RecordType,
        server: Option<SocketAddr>,
    ) -> Result<QueryResponse, DomainError> {
        self.calls.lock().unwrap().push(RecordedQuery {
            kind,
            name: name.to_string(),
            record_type,
            server,
        });
        self.script
            .lock()
            .unwrap()
            .get(&(kind, name.to_string(), record_type, server))
            .cloned()
            .unwrap_or_else(|| Ok(QueryResponse::empty(ResponseCode::NXDomain)))
    }
}

#[async_trait]
impl DnsQueryPort for MockDnsQuery {
    async fn recursive_query(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<QueryResponse, DomainError> {
        self.answer(QueryKind::Recursive, name, record_type, None)
    }

    async fn direct_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<QueryResponse, DomainError> {
        self.answer(QueryKind::Direct, name, record_type, Some(server))
    }

    async fn direct_recursive_query(
        &self,
        name: &str,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<QueryResponse, DomainError> {
        self.answer(QueryKind::DirectRecursive, name, record_type, Some(server))
    }
}

/// Scripted HTTP port. Unscripted URLs fail like an unreachable host.
#[derive(Default)]
pub struct MockHttpFetcher {
    bodies: Mutex<HashMap<String, String>>,
    fetched: Mutex<Vec<String>>,
}

impl MockHttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_body(&self, url: &str, body: &str) {
        self.bodies
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpFetchPort for MockHttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.bodies
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| DomainError::HttpFetch {
                url: url.to_string(),
                message: "connection refused".to_string(),
            })
    }
}

pub struct MockCatalog {
    definitions: Vec<FingerprintDefinition>,
}

impl MockCatalog {
    pub fn new(definitions: Vec<FingerprintDefinition>) -> Self {
        Self { definitions }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl FingerprintCatalogPort for MockCatalog {
    fn load(&self) -> Result<Vec<Fingerprint>, DomainError> {
        self.definitions
            .iter()
            .cloned()
            .map(Fingerprint::compile)
            .collect()
    }
}

/// In-memory zones keyed by source name.
#[derive(Default)]
pub struct MockZoneSource {
    zones: HashMap<String, Vec<ResourceRecord>>,
}

impl MockZoneSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(mut self, source: &str, records: Vec<ResourceRecord>) -> Self {
        self.zones.insert(source.to_string(), records);
        self
    }
}

#[async_trait]
impl ZoneSource for MockZoneSource {
    async fn read_zone(&self, source: &str) -> Result<Zone, DomainError> {
        self.zones
            .get(source)
            .map(|records| Zone::new(source, records.clone()))
            .ok_or_else(|| DomainError::IoError(format!("{}: No such file or directory", source)))
    }
}

/// Checker that records every invocation into a shared log.
pub struct RecordingChecker {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
    fail_init: bool,
    fail_check: bool,
}

impl RecordingChecker {
    pub fn new(name: &'static str, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name,
            log,
            fail_init: false,
            fail_check: false,
        }
    }

    pub fn failing_init(mut self) -> Self {
        self.fail_init = true;
        self
    }

    pub fn failing_check(mut self) -> Self {
        self.fail_check = true;
        self
    }
}

#[async_trait]
impl Checker for RecordingChecker {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn init(&mut self) -> Result<(), DomainError> {
        self.log.lock().unwrap().push(format!("init:{}", self.name));
        if self.fail_init {
            return Err(DomainError::FingerprintCatalog("broken".to_string()));
        }
        Ok(())
    }

    async fn check(&self, record: &ResourceRecord) -> Result<(), DomainError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", record.name, self.name));
        if self.fail_check {
            return Err(DomainError::QueryTimeout);
        }
        Ok(())
    }
}

pub struct TestContext {
    pub dns: Arc<MockDnsQuery>,
    pub http: Arc<MockHttpFetcher>,
    pub sink: Arc<ResultSink>,
    pub ctx: CheckerContext,
}

impl TestContext {
    pub fn new(connectivity: Connectivity, catalog: MockCatalog) -> Self {
        let dns = Arc::new(MockDnsQuery::new());
        let http = Arc::new(MockHttpFetcher::new());
        let sink = Arc::new(ResultSink::new());
        let ctx = CheckerContext::new(
            dns.clone(),
            http.clone(),
            Arc::new(catalog),
            connectivity,
            sink.clone(),
        );
        Self {
            dns,
            http,
            sink,
            ctx,
        }
    }

    pub fn connected() -> Self {
        Self::new(Connectivity::all(), MockCatalog::empty())
    }
}

pub fn record(name: &str, data: RecordData) -> ResourceRecord {
    ResourceRecord::new(name, 300, data)
}

pub fn a(name: &str, addr: &str) -> ResourceRecord {
    record(name, RecordData::A(addr.parse().unwrap()))
}

pub fn aaaa(name: &str, addr: &str) -> ResourceRecord {
    record(name, RecordData::AAAA(addr.parse().unwrap()))
}

pub fn cname(name: &str, target: &str) -> ResourceRecord {
    record(name, RecordData::CNAME(target.to_string()))
}

pub fn ns(name: &str, target: &str) -> ResourceRecord {
    record(name, RecordData::NS(target.to_string()))
}

pub fn txt(name: &str, text: &str) -> ResourceRecord {
    record(name, RecordData::TXT(vec![text.to_string()]))
}

pub fn soa(name: &str) -> ResourceRecord {
    record(
        name,
        RecordData::SOA(SoaData {
            mname: "ns1.example.com.".to_string(),
            rname: "hostmaster.example.com.".to_string(),
            serial: 1,
            refresh: 7200,
            retry: 3600,
            expire: 1209600,
            minimum: 300,
        }),
    )
}

pub fn answer(records: Vec<ResourceRecord>) -> Result<QueryResponse, DomainError> {
    Ok(QueryResponse::new(ResponseCode::NoError, records))
}

pub fn nxdomain() -> Result<QueryResponse, DomainError> {
    Ok(QueryResponse::empty(ResponseCode::NXDomain))
}

pub fn timeout(server: &str) -> Result<QueryResponse, DomainError> {
    Err(DomainError::TransportTimeout {
        server: server.to_string(),
    })
}

pub fn s3_definition() -> FingerprintDefinition {
    FingerprintDefinition {
        service: "AWS/S3".to_string(),
        cname: vec![".s3.amazonaws.com".to_string(), ".s3-website".to_string()],
        addresses: vec!["52.218.0.0/17".to_string()],
        fingerprint: vec![
            "NoSuchBucket".to_string(),
            "The specified bucket does not exist".to_string(),
        ],
        ..Default::default()
    }
}
