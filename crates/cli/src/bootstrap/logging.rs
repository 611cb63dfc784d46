use ferrous_audit_domain::Config;
use std::io::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout may carry the report. `RUST_LOG` wins over the
/// configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    debug!("Logging initialized at level: {}", config.logging.level);
}
