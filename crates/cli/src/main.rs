use clap::Parser;
use commands::ReportCommand;
use ferrous_audit_application::checkers::CheckerRegistry;
use ferrous_audit_application::use_cases::AuditZonesUseCase;
use ferrous_audit_domain::{CliOverrides, Config};
use ferrous_audit_infrastructure::output::JsonResultWriter;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-audit")]
#[command(version)]
#[command(about = "Ferrous Audit - finds dangling DNS records in zone files")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<ReportCommand>,

    /// Zone files to scan; each zone is named after its file
    #[arg(value_name = "ZONE_FILE")]
    zones: Vec<String>,

    /// Recursive resolver, IP or IP:port (repeatable)
    #[arg(short = 'r', long = "resolver", value_name = "ADDR")]
    resolvers: Vec<String>,

    /// Check to run: cname, ns, http (repeatable)
    #[arg(short = 'c', long = "check", value_name = "CHECK")]
    checks: Vec<String>,

    /// Read zone file paths from stdin, one per line
    #[arg(long)]
    stdin: bool,

    /// Output file, or '-' for stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// DNS query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        bootstrap::init_logging(&Config::default());
        return commands::run_report_command(command);
    }

    let cli_overrides = CliOverrides {
        resolvers: cli.resolvers.clone(),
        checks: cli.checks.clone(),
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
        output_path: cli.output.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Audit v{}", env!("CARGO_PKG_VERSION"));

    // Fail on a bad destination before spending time on the scan
    let output = JsonResultWriter::open(&config.output.path)?;

    let resolvers = bootstrap::discover_resolvers(&config).await?;
    let zones = bootstrap::zone_sources(&cli.zones, cli.stdin)?;

    let services = di::AuditServices::new(&config, resolvers)?;

    let connectivity = services.probe_connectivity(&config).execute().await;

    let ctx = services.checker_context(&config, connectivity);
    let registry = CheckerRegistry::with_builtins(&ctx);
    let audit = AuditZonesUseCase::prepare(
        registry,
        &config.scan.effective_checks(),
        services.zone_source.clone(),
    )
    .await?;

    info!(checks = ?audit.check_names(), zones = zones.len(), "Scan starting");
    let summary = audit.execute(&zones).await;

    output.write(&services.sink.snapshot())?;

    info!(
        findings = services.sink.len(),
        zones = summary.zones,
        skipped_zones = summary.skipped_zones,
        "Audit complete"
    );
    Ok(())
}
