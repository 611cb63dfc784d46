mod record;
mod record_type;

pub use record::{fqdn, names_equal, RecordData, ResourceRecord, SoaData};
pub use record_type::RecordType;
