//! External data provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the three external data providers.
///
/// Keys are injected into each adapter constructor at startup; nothing in
/// this crate reads credentials from ambient process state after load.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersConfig {
    /// Google Maps API key (directions + geocoding)
    pub google_maps_api_key: Option<String>,

    /// WeatherAPI.com API key
    pub weather_api_key: Option<String>,

    /// Google Air Quality API key
    pub air_quality_api_key: Option<String>,

    /// Base URL for the Google Maps APIs
    #[serde(default = "default_maps_base_url")]
    pub maps_base_url: String,

    /// Base URL for WeatherAPI.com
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,

    /// Base URL for the Google Air Quality API
    #[serde(default = "default_air_quality_base_url")]
    pub air_quality_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ProvidersConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate provider configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !has_value(&self.google_maps_api_key) {
            return Err(ValidationError::MissingRequired("GOOGLE_MAPS_API_KEY"));
        }

        if !has_value(&self.weather_api_key) {
            return Err(ValidationError::MissingRequired("WEATHER_API_KEY"));
        }

        if !has_value(&self.air_quality_api_key) {
            return Err(ValidationError::MissingRequired("AIR_QUALITY_API_KEY"));
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if !self.maps_base_url.starts_with("http") {
            return Err(ValidationError::InvalidBaseUrl("maps"));
        }

        if !self.weather_base_url.starts_with("http") {
            return Err(ValidationError::InvalidBaseUrl("weather"));
        }

        if !self.air_quality_base_url.starts_with("http") {
            return Err(ValidationError::InvalidBaseUrl("air_quality"));
        }

        Ok(())
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: None,
            weather_api_key: None,
            air_quality_api_key: None,
            maps_base_url: default_maps_base_url(),
            weather_base_url: default_weather_base_url(),
            air_quality_base_url: default_air_quality_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn has_value(key: &Option<String>) -> bool {
    key.as_ref().is_some_and(|k| !k.is_empty())
}

fn default_maps_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

fn default_weather_base_url() -> String {
    "http://api.weatherapi.com".to_string()
}

fn default_air_quality_base_url() -> String {
    "https://airquality.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> ProvidersConfig {
        ProvidersConfig {
            google_maps_api_key: Some("maps-key".to_string()),
            weather_api_key: Some("weather-key".to_string()),
            air_quality_api_key: Some("aq-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_providers_config_defaults() {
        let config = ProvidersConfig::default();
        assert_eq!(config.maps_base_url, "https://maps.googleapis.com");
        assert_eq!(config.weather_base_url, "http://api.weatherapi.com");
        assert_eq!(
            config.air_quality_base_url,
            "https://airquality.googleapis.com"
        );
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_validation_requires_all_keys() {
        let mut config = full_config();
        assert!(config.validate().is_ok());

        config.weather_api_key = None;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("WEATHER_API_KEY"))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_key() {
        let mut config = full_config();
        config.air_quality_api_key = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_base_url() {
        let mut config = full_config();
        config.maps_base_url = "not-a-url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_timeout_duration() {
        let config = ProvidersConfig {
            timeout_secs: 10,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }
}
