pub mod config;
pub mod logging;
pub mod resolvers;
pub mod zones;

pub use config::load_config;
pub use logging::init_logging;
pub use resolvers::discover_resolvers;
pub use zones::zone_sources;
