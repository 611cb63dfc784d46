#![allow(dead_code)]
use ferrous_audit_domain::{QueryResponse, RecordData, ResourceRecord, ResponseCode, SoaData};

pub struct RecordBuilder {
    name: String,
    ttl: u32,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ttl: 300,
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn a(self, addr: &str) -> ResourceRecord {
        ResourceRecord::new(self.name, self.ttl, RecordData::A(addr.parse().unwrap()))
    }

    pub fn aaaa(self, addr: &str) -> ResourceRecord {
        ResourceRecord::new(self.name, self.ttl, RecordData::AAAA(addr.parse().unwrap()))
    }

    pub fn cname(self, target: &str) -> ResourceRecord {
        ResourceRecord::new(self.name, self.ttl, RecordData::CNAME(target.to_string()))
    }

    pub fn ns(self, target: &str) -> ResourceRecord {
        ResourceRecord::new(self.name, self.ttl, RecordData::NS(target.to_string()))
    }

    pub fn txt(self, text: &str) -> ResourceRecord {
        ResourceRecord::new(self.name, self.ttl, RecordData::TXT(vec![text.to_string()]))
    }

    pub fn soa(self) -> ResourceRecord {
        ResourceRecord::new(
            self.name,
            self.ttl,
            RecordData::SOA(SoaData {
                mname: "ns1.example.com.".to_string(),
                rname: "hostmaster.example.com.".to_string(),
                serial: 2024010101,
                refresh: 7200,
                retry: 3600,
                expire: 1209600,
                minimum: 300,
            }),
        )
    }
}

pub fn response(answers: Vec<ResourceRecord>) -> QueryResponse {
    QueryResponse::new(ResponseCode::NoError, answers)
}
