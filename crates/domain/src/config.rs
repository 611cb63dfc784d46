mod dns;
mod errors;
mod http;
mod logging;
mod output;
mod root;
mod scan;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use root::{CliOverrides, Config};
pub use scan::{ScanConfig, DEFAULT_CHECKS};
