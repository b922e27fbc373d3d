//! Google Maps Directions - DirectionsProvider backed by the Google
//! Maps Directions API.
//!
//! Issues one GET per lookup and returns the route list from the reply.
//! Google reports most failures as a status string inside an HTTP 200
//! body, so the adapter checks both layers.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::ports::{DirectionsProvider, ProviderError};

/// Configuration for the Google Maps directions provider.
#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://maps.googleapis.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GoogleMapsConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://maps.googleapis.com".to_string(),
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

/// Google Maps Directions API provider.
pub struct GoogleMapsDirections {
    config: GoogleMapsConfig,
    client: Client,
}

impl GoogleMapsDirections {
    /// Creates a new provider with the given configuration.
    pub fn new(config: GoogleMapsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the directions endpoint URL.
    fn directions_url(&self) -> String {
        format!("{}/maps/api/directions/json", self.config.base_url)
    }

    /// Extracts the route list from a reply body, mapping vendor status
    /// strings to errors.
    ///
    /// `ZERO_RESULTS` is a successful lookup with an empty route list,
    /// not an error.
    fn extract_routes(body: serde_json::Value) -> Result<serde_json::Value, ProviderError> {
        let status = body
            .get("status")
            .and_then(|s| s.as_str())
            .ok_or_else(|| ProviderError::parse("Directions reply carried no status"))?;

        match status {
            "OK" | "ZERO_RESULTS" => Ok(body
                .get("routes")
                .cloned()
                .unwrap_or(serde_json::Value::Array(Vec::new()))),
            _ => {
                let message = body
                    .get("error_message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("no details provided");
                Err(ProviderError::api(status, message))
            }
        }
    }
}

#[async_trait]
impl DirectionsProvider for GoogleMapsDirections {
    async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: &str,
    ) -> Result<serde_json::Value, ProviderError> {
        tracing::debug!(origin, destination, mode, "fetching directions");

        let response = self
            .client
            .get(self.directions_url())
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode),
                ("departure_time", "now"),
                ("key", self.config.api_key()),
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
            return Err(ProviderError::http(status.as_u16(), body));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::parse(format!("Failed to parse directions reply: {}", e)))?;

        Self::extract_routes(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = GoogleMapsConfig::new("test-key")
            .with_base_url("http://localhost:9090")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:9090");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn extract_routes_returns_route_list() {
        let body = serde_json::json!({
            "status": "OK",
            "routes": [{"summary": "I-80 W"}],
        });

        let routes = GoogleMapsDirections::extract_routes(body).unwrap();

        assert_eq!(routes[0]["summary"], "I-80 W");
    }

    #[test]
    fn extract_routes_zero_results_is_empty_list() {
        let body = serde_json::json!({ "status": "ZERO_RESULTS", "routes": [] });

        let routes = GoogleMapsDirections::extract_routes(body).unwrap();

        assert_eq!(routes, serde_json::json!([]));
    }

    #[test]
    fn extract_routes_maps_vendor_error() {
        let body = serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
        });

        let err = GoogleMapsDirections::extract_routes(body).unwrap_err();

        assert_eq!(
            err,
            ProviderError::api("REQUEST_DENIED", "The provided API key is invalid.")
        );
    }

    #[test]
    fn extract_routes_requires_status() {
        let err = GoogleMapsDirections::extract_routes(serde_json::json!({})).unwrap_err();

        assert!(matches!(err, ProviderError::Parse(_)));
    }
}
