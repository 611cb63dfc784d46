use ferrous_audit_application::checkers::validate_check_ids;
use ferrous_audit_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    validate_check_ids(&config.scan.effective_checks())?;

    info!(
        config_file = config_path.unwrap_or("default"),
        resolvers = config.dns.resolvers.len(),
        checks = ?config.scan.effective_checks(),
        query_timeout_ms = config.dns.query_timeout_ms,
        output = %config.output.path,
        "Configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_check_fails_config_loading() {
        let overrides = CliOverrides {
            resolvers: vec!["192.0.2.53".to_string()],
            checks: vec!["cname".to_string(), "dmarc".to_string()],
            ..CliOverrides::default()
        };

        let err = load_config(None, overrides).unwrap_err();

        assert!(err.to_string().contains("dmarc"));
    }

    #[test]
    fn test_alias_accepted_at_config_loading() {
        let overrides = CliOverrides {
            resolvers: vec!["192.0.2.53".to_string()],
            checks: vec!["http-fingerprint".to_string()],
            ..CliOverrides::default()
        };

        assert!(load_config(None, overrides).is_ok());
    }
}
