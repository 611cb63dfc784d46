pub mod dns;
pub mod fingerprints;
pub mod http;
pub mod output;
pub mod report;
pub mod system;
pub mod zonefile;
