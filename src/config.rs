use std::env;
use std::fmt;
use anyhow::{Context, Result};

pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Clone)]
pub struct Config {
    /// OpenWeatherMap credential. `None` is reported per request, not at startup.
    pub api_key: Option<String>,
    pub upstream_base_url: String,
    pub service_port: u16,
    pub service_host: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("upstream_base_url", &self.upstream_base_url)
            .field("service_port", &self.service_port)
            .field("service_host", &self.service_host)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let upstream_base_url = env::var("OPENWEATHER_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_BASE_URL.to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            api_key,
            upstream_base_url: upstream_base_url.trim_end_matches('/').to_string(),
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Upstream base URL: {}", self.upstream_base_url);
        if self.api_key.is_some() {
            tracing::info!("  OpenWeatherMap API key: configured");
        } else {
            tracing::warn!("  OpenWeatherMap API key: missing (proxy requests will fail with 500)");
        }
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
