use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::http::StatusCode;
use serde::de::IgnoredAny;
use std::sync::Arc;

use crate::config::Config;

/// Unit system requested from OpenWeatherMap for every call
pub const UNITS: &str = "metric";

/// Upstream resources the proxy can forward to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherResource {
    /// Current conditions for a city
    CurrentWeather,
    /// 5-day forecast in 3-hour intervals
    Forecast,
}

impl WeatherResource {
    /// Path segment appended to the upstream base URL
    pub fn path(self) -> &'static str {
        match self {
            WeatherResource::CurrentWeather => "weather",
            WeatherResource::Forecast => "forecast",
        }
    }

    /// Generic message returned to the caller when the upstream call fails
    pub fn failure_message(self) -> &'static str {
        match self {
            WeatherResource::CurrentWeather => "Failed to fetch weather data",
            WeatherResource::Forecast => "Failed to fetch forecast data",
        }
    }
}

/// Status and raw JSON body returned by the upstream service
#[derive(Debug, Clone)]
pub struct UpstreamResult {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Shareable OpenWeatherMap client for use across async handlers
#[derive(Clone)]
pub struct UpstreamClient {
    inner: Arc<reqwest::Client>,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new upstream client from configuration
    ///
    /// No request timeout is set; reqwest's defaults apply.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!("Upstream weather service: {}", config.upstream_base_url);

        Ok(Self {
            inner: Arc::new(client),
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn resource_url(&self, resource: WeatherResource) -> String {
        format!("{}/{}", self.base_url, resource.path())
    }

    /// Issue one GET for `city` against the given upstream resource
    ///
    /// Any upstream status is returned as an `UpstreamResult` as long as the
    /// body is valid JSON. Network failures and non-JSON bodies are errors.
    /// Error messages never contain the request URL, which carries the API key.
    pub async fn fetch(
        &self,
        resource: WeatherResource,
        city: &str,
        api_key: &str,
    ) -> Result<UpstreamResult> {
        // Percent-encoded (space as %20, not form-style `+`), once per value
        let url = format!(
            "{}?q={}&appid={}&units={}",
            self.resource_url(resource),
            urlencoding::encode(city),
            urlencoding::encode(api_key),
            UNITS
        );

        let response = self
            .inner
            .get(&url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Request to upstream '{}' endpoint failed", resource.path()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read upstream response body")?;

        serde_json::from_slice::<IgnoredAny>(&body)
            .with_context(|| format!("Upstream returned invalid JSON (status {})", status))?;

        tracing::debug!(
            "Upstream '{}' responded with status {} ({} bytes)",
            resource.path(),
            status,
            body.len()
        );

        Ok(UpstreamResult { status, body })
    }
}
