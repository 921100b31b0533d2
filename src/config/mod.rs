use std::env;

/// Contract the dashboard tracks by default.
pub const DEFAULT_CONTRACT: &str = "sim_akbAOGhwbBB8ENZsLnAS20RIN5pQ1iww";
/// Player wallet the dashboard filters by default.
pub const DEFAULT_FILTER_ADDRESS: &str =
    "0x0188167902e1e0bdc56e32fa394ba3446a4a6cd3768536425f8dd50f5d20a8ca";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,

    /// Fixed seed for mock generation; fresh entropy per request when unset.
    pub rng_seed: Option<u64>,

    // Dashboard poller
    pub poller_enabled: bool,
    pub poller_base_url: String,
    pub poller_contract: String,
    pub poller_filter_address: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()?;

        let rng_seed = match env::var("RNG_SEED") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse()
                    .map_err(|e| anyhow::anyhow!("RNG_SEED must be an unsigned integer: {e}"))?,
            ),
            _ => None,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            log_format: LogFormat::from_str(&env::var("LOG_FORMAT").unwrap_or_default()),
            rng_seed,

            poller_enabled: env::var("POLLER_ENABLED")
                .unwrap_or_else(|_| "false".into())
                .parse()
                .unwrap_or(false),
            poller_base_url: env::var("POLLER_BASE_URL")
                .unwrap_or_else(|_| format!("http://127.0.0.1:{port}")),
            poller_contract: env::var("POLLER_CONTRACT")
                .unwrap_or_else(|_| DEFAULT_CONTRACT.into()),
            poller_filter_address: env::var("POLLER_FILTER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_FILTER_ADDRESS.into()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            log_format: LogFormat::Text,
            rng_seed: None,
            poller_enabled: false,
            poller_base_url: "http://127.0.0.1:8080".into(),
            poller_contract: DEFAULT_CONTRACT.into(),
            poller_filter_address: DEFAULT_FILTER_ADDRESS.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::from_str(""), LogFormat::Text);
        assert_eq!(LogFormat::from_str("pretty"), LogFormat::Text);
    }
}
