use async_trait::async_trait;
use ferrous_audit_application::ports::HttpFetchPort;
use ferrous_audit_domain::config::HttpConfig;
use ferrous_audit_domain::DomainError;
use std::time::Duration;
use tracing::debug;

/// Plain GET client for fingerprint probes.
///
/// Certificate validation is off: the hosts being probed are usually
/// unclaimed cloud endpoints that serve someone else's certificate.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| DomainError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpFetchPort for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(url, e))?;

        debug!(url = %url, status = response.status().as_u16(), "Probe response");

        response.text().await.map_err(|e| fetch_error(url, e))
    }
}

fn fetch_error(url: &str, error: reqwest::Error) -> DomainError {
    DomainError::HttpFetch {
        url: url.to_string(),
        message: error.to_string(),
    }
}
