use super::record_type_map::RecordTypeMapper;
use ferrous_audit_domain::{
    DomainError, QueryResponse, RecordData, ResourceRecord, ResponseCode, SoaData,
};
use hickory_proto::op::{Message, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<QueryResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = Self::map_rcode(message.response_code());
        let answers: Vec<ResourceRecord> = message.answers().iter().map(Self::convert).collect();

        debug!(
            rcode = rcode.as_str(),
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(QueryResponse {
            rcode,
            truncated: message.truncated(),
            answers,
        })
    }

    fn convert(record: &Record) -> ResourceRecord {
        let data = match record.data() {
            RData::A(a) => RecordData::A(a.0),
            RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
            RData::CNAME(target) => RecordData::CNAME(target.to_utf8()),
            RData::NS(ns) => RecordData::NS(ns.to_utf8()),
            RData::SOA(soa) => RecordData::SOA(SoaData {
                mname: soa.mname().to_utf8(),
                rname: soa.rname().to_utf8(),
                serial: soa.serial(),
                refresh: soa.refresh() as u32,
                retry: soa.retry() as u32,
                expire: soa.expire() as u32,
                minimum: soa.minimum(),
            }),
            RData::TXT(txt) => RecordData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                    .collect(),
            ),
            other => RecordData::Other {
                record_type: RecordTypeMapper::from_hickory(record.record_type()),
                rdata: other.to_string(),
            },
        };

        ResourceRecord::new(record.name().to_utf8(), record.ttl(), data)
    }

    pub fn map_rcode(rcode: HickoryResponseCode) -> ResponseCode {
        match rcode {
            HickoryResponseCode::NoError => ResponseCode::NoError,
            HickoryResponseCode::FormErr => ResponseCode::FormErr,
            HickoryResponseCode::ServFail => ResponseCode::ServFail,
            HickoryResponseCode::NXDomain => ResponseCode::NXDomain,
            HickoryResponseCode::NotImp => ResponseCode::NotImp,
            HickoryResponseCode::Refused => ResponseCode::Refused,
            other => ResponseCode::Other(u16::from(other)),
        }
    }
}
