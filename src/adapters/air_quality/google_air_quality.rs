//! Google Air Quality - AirQualityProvider backed by the Google Air
//! Quality API.
//!
//! The lookup endpoint takes coordinates, so each request first resolves
//! the location string through the Google Geocoding API, then posts the
//! resulting latitude and longitude to the current-conditions endpoint.
//! Both calls share one API key.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::ports::{AirQualityProvider, ProviderError};

/// Extra data blocks requested with every lookup.
const EXTRA_COMPUTATIONS: [&str; 5] = [
    "LOCAL_AQI",
    "HEALTH_RECOMMENDATIONS",
    "POLLUTANT_ADDITIONAL_INFO",
    "POLLUTANT_CONCENTRATION",
    "DOMINANT_POLLUTANT_CONCENTRATION",
];

/// Configuration for the Google air quality provider.
#[derive(Debug, Clone)]
pub struct GoogleAirQualityConfig {
    /// API key for authentication, shared by geocoding and lookup.
    api_key: Secret<String>,
    /// Base URL for the air quality API (default: https://airquality.googleapis.com).
    pub base_url: String,
    /// Base URL for the geocoding API (default: https://maps.googleapis.com).
    pub maps_base_url: String,
    /// Request timeout, applied to each of the two calls.
    pub timeout: Duration,
}

impl GoogleAirQualityConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://airquality.googleapis.com".to_string(),
            maps_base_url: "https://maps.googleapis.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the air quality base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the geocoding base URL.
    pub fn with_maps_base_url(mut self, url: impl Into<String>) -> Self {
        self.maps_base_url = url.into();
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

/// Google Air Quality API provider.
pub struct GoogleAirQuality {
    config: GoogleAirQualityConfig,
    client: Client,
}

impl GoogleAirQuality {
    /// Creates a new provider with the given configuration.
    pub fn new(config: GoogleAirQualityConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the geocoding endpoint URL.
    fn geocode_url(&self) -> String {
        format!("{}/maps/api/geocode/json", self.config.maps_base_url)
    }

    /// Builds the current-conditions lookup URL.
    fn lookup_url(&self) -> String {
        format!(
            "{}/v1/currentConditions:lookup?key={}",
            self.config.base_url,
            self.config.api_key()
        )
    }

    /// Maps a transport error to a provider error.
    fn transport_error(&self, e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::network(format!(
                "Request timed out after {}s",
                self.config.timeout.as_secs()
            ))
        } else {
            ProviderError::network(e.to_string())
        }
    }

    /// Pulls the first result's coordinates out of a geocoding reply.
    fn extract_coordinates(body: serde_json::Value) -> Result<(f64, f64), ProviderError> {
        let status = body
            .get("status")
            .and_then(|s| s.as_str())
            .ok_or_else(|| ProviderError::parse("Geocoding reply carried no status"))?;

        if status != "OK" {
            let message = body
                .get("error_message")
                .and_then(|m| m.as_str())
                .unwrap_or("no geocoding results");
            return Err(ProviderError::api(status, message));
        }

        let location = body
            .get("results")
            .and_then(|r| r.get(0))
            .and_then(|r| r.get("geometry"))
            .and_then(|g| g.get("location"))
            .ok_or_else(|| ProviderError::parse("Geocoding reply carried no location"))?;

        let latitude = location.get("lat").and_then(|v| v.as_f64());
        let longitude = location.get("lng").and_then(|v| v.as_f64());

        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Ok((lat, lng)),
            _ => Err(ProviderError::parse(
                "Geocoding reply carried malformed coordinates",
            )),
        }
    }

    /// Resolves a location string to coordinates.
    async fn geocode(&self, location: &str) -> Result<(f64, f64), ProviderError> {
        let response = self
            .client
            .get(self.geocode_url())
            .query(&[("address", location), ("key", self.config.api_key())])
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::http(status.as_u16(), body));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::parse(format!("Failed to parse geocoding reply: {}", e)))?;

        Self::extract_coordinates(body)
    }
}

#[async_trait]
impl AirQualityProvider for GoogleAirQuality {
    async fn get_air_quality(&self, location: &str) -> Result<serde_json::Value, ProviderError> {
        tracing::debug!(location, "fetching air quality");

        let (latitude, longitude) = self.geocode(location).await?;
        tracing::debug!(location, latitude, longitude, "location geocoded");

        let body = serde_json::json!({
            "location": { "latitude": latitude, "longitude": longitude },
            "extraComputations": EXTRA_COMPUTATIONS,
        });

        let response = self
            .client
            .post(self.lookup_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::http(status.as_u16(), body));
        }

        // The vendor signals some failures inside a 200 body; those pass
        // through as data for the caller to read.
        response
            .json()
            .await
            .map_err(|e| ProviderError::parse(format!("Failed to parse air quality reply: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = GoogleAirQualityConfig::new("test-key")
            .with_base_url("http://localhost:9092")
            .with_maps_base_url("http://localhost:9090")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:9092");
        assert_eq!(config.maps_base_url, "http://localhost:9090");
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn extract_coordinates_reads_first_result() {
        let body = serde_json::json!({
            "status": "OK",
            "results": [
                {"geometry": {"location": {"lat": 37.8715, "lng": -122.273}}},
                {"geometry": {"location": {"lat": 0.0, "lng": 0.0}}},
            ],
        });

        let (lat, lng) = GoogleAirQuality::extract_coordinates(body).unwrap();

        assert_eq!(lat, 37.8715);
        assert_eq!(lng, -122.273);
    }

    #[test]
    fn extract_coordinates_maps_zero_results() {
        let body = serde_json::json!({ "status": "ZERO_RESULTS", "results": [] });

        let err = GoogleAirQuality::extract_coordinates(body).unwrap_err();

        assert_eq!(
            err,
            ProviderError::api("ZERO_RESULTS", "no geocoding results")
        );
    }

    #[test]
    fn extract_coordinates_rejects_malformed_location() {
        let body = serde_json::json!({
            "status": "OK",
            "results": [{"geometry": {"location": {"lat": "north"}}}],
        });

        let err = GoogleAirQuality::extract_coordinates(body).unwrap_err();

        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[test]
    fn lookup_body_lists_extra_computations() {
        assert_eq!(EXTRA_COMPUTATIONS.len(), 5);
        assert_eq!(EXTRA_COMPUTATIONS[0], "LOCAL_AQI");
        assert_eq!(EXTRA_COMPUTATIONS[4], "DOMINANT_POLLUTANT_CONCENTRATION");
    }
}
