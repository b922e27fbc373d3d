//! WeatherAPI - WeatherProvider backed by weatherapi.com.
//!
//! One GET per lookup against the current-conditions endpoint. The reply
//! body is returned unchanged; it already bundles an air quality block
//! because the request asks for it.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::ports::{ProviderError, WeatherProvider};

/// Configuration for the WeatherAPI provider.
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: http://api.weatherapi.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl WeatherApiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "http://api.weatherapi.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// WeatherAPI current-conditions provider.
pub struct WeatherApi {
    config: WeatherApiConfig,
    client: Client,
}

impl WeatherApi {
    /// Creates a new provider with the given configuration.
    pub fn new(config: WeatherApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the current-conditions endpoint URL.
    fn current_url(&self) -> String {
        format!("{}/v1/current.json", self.config.base_url)
    }

    /// Pulls the service's error message out of a failure body.
    fn error_message(body: &str) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string())
    }
}

#[async_trait]
impl WeatherProvider for WeatherApi {
    async fn get_current_weather(&self, location: &str) -> Result<serde_json::Value, ProviderError> {
        tracing::debug!(location, "fetching current weather");

        let response = self
            .client
            .get(self.current_url())
            .query(&[
                ("key", self.config.api_key()),
                ("q", location),
                ("aqi", "yes"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::network(format!(
                        "Request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    ProviderError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::http(
                status.as_u16(),
                Self::error_message(&body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::parse(format!("Failed to parse weather reply: {}", e)))
    }
}
