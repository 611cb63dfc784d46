use async_trait::async_trait;
use bytes::Bytes;
use domain::base::name::Name;
use domain::rdata::ZoneRecordData;
use domain::zonefile::inplace::{Entry, ScannedDname, ScannedRecord, Zonefile};
use ferrous_audit_application::ports::ZoneSource;
use ferrous_audit_domain::{fqdn, DomainError, RecordData, RecordType, ResourceRecord, SoaData, Zone};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, warn};

/// Reads RFC 1035 master files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZoneFileReader;

impl ZoneFileReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses `content` as the zone `name`, with the zone name as the
    /// initial origin. Parsing stops at the first syntax error; the records
    /// read before it are returned together with that error.
    pub fn parse_str(name: &str, content: &str) -> (Zone, Option<DomainError>) {
        let mut records = Vec::new();

        let origin = match Name::<Bytes>::from_str(&fqdn(name)) {
            Ok(origin) => origin,
            Err(e) => {
                let error = DomainError::InvalidDomainName(format!("{}: {}", name, e));
                return (Zone::new(name, records), Some(error));
            }
        };

        let mut zonefile = Zonefile::from(content);
        zonefile.set_origin(origin);

        let error = loop {
            match zonefile.next_entry() {
                Ok(Some(Entry::Record(record))) => records.push(to_resource_record(&record)),
                Ok(Some(Entry::Include { path, .. })) => {
                    break Some(DomainError::ZoneParse(format!(
                        "$INCLUDE {} is not supported",
                        path
                    )));
                }
                Ok(None) => break None,
                Err(e) => break Some(DomainError::ZoneParse(e.to_string())),
            }
        };

        (Zone::new(name, records), error)
    }
}

#[async_trait]
impl ZoneSource for ZoneFileReader {
    async fn read_zone(&self, source: &str) -> Result<Zone, DomainError> {
        let content = fs::read_to_string(source)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to read zone {}: {}", source, e)))?;

        let name = Zone::name_from_source(source);
        let (zone, error) = Self::parse_str(&name, &content);

        if let Some(error) = &error {
            warn!(
                zone = %name,
                source = %source,
                records = zone.records.len(),
                error = %error,
                "Zone file parsing stopped early"
            );
        }
        debug!(zone = %name, records = zone.records.len(), "Zone file parsed");

        Ok(zone)
    }
}

fn to_resource_record(record: &ScannedRecord) -> ResourceRecord {
    let data = match record.data() {
        ZoneRecordData::A(a) => RecordData::A(a.addr()),
        ZoneRecordData::Aaaa(aaaa) => RecordData::AAAA(aaaa.addr()),
        ZoneRecordData::Cname(cname) => RecordData::CNAME(absolute(cname.cname())),
        ZoneRecordData::Ns(ns) => RecordData::NS(absolute(ns.nsdname())),
        ZoneRecordData::Soa(soa) => RecordData::SOA(SoaData {
            mname: absolute(soa.mname()),
            rname: absolute(soa.rname()),
            serial: soa.serial().into_int(),
            refresh: soa.refresh().as_secs(),
            retry: soa.retry().as_secs(),
            expire: soa.expire().as_secs(),
            minimum: soa.minimum().as_secs(),
        }),
        ZoneRecordData::Txt(txt) => RecordData::TXT(
            txt.iter()
                .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                .collect(),
        ),
        other => RecordData::Other {
            record_type: RecordType::from_u16(record.rtype().to_int()),
            rdata: other.to_string(),
        },
    };

    let mut rr = ResourceRecord::new(absolute(record.owner()), record.ttl().as_secs(), data);
    rr.class = record.class().to_string();
    rr
}

fn absolute(name: &ScannedDname) -> String {
    name.fmt_with_dot().to_string()
}
