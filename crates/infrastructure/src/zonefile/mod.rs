pub mod reader;

pub use reader::ZoneFileReader;
