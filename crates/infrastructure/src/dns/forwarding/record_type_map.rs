//! Mapping between `ferrous_audit_domain::RecordType` and `hickory_proto::rr::RecordType`

use ferrous_audit_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Domain → hickory, for building queries. Goes through the numeric code
    /// so that `Unknown(n)` survives unchanged.
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Hickory → domain, for decoding answers.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
