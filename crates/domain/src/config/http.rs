use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Whole-request timeout for fingerprint probes, in milliseconds
    #[serde(default = "default_http_timeout")]
    pub timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_http_timeout() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    concat!("ferrous-audit/", env!("CARGO_PKG_VERSION")).to_string()
}
