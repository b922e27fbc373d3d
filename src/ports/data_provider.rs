//! Data Provider Ports - Interfaces for external travel data services.
//!
//! Three narrow ports cover the data the agent needs: directions between
//! two locations, current weather, and current air quality. Each returns
//! raw JSON from the vendor; interpreting that data is the reasoning
//! engine's job, not the adapter's.

use async_trait::async_trait;

/// Port for route and directions lookups.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Fetches directions from origin to destination for a travel mode.
    ///
    /// Mode is one of `driving`, `walking`, `bicycling`, or `transit`;
    /// unknown modes are passed through for the vendor to reject.
    async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: &str,
    ) -> Result<serde_json::Value, ProviderError>;
}

/// Port for current weather lookups.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current weather for a location given as a place name or
    /// `lat,lng` coordinates.
    async fn get_current_weather(&self, location: &str) -> Result<serde_json::Value, ProviderError>;
}

/// Port for current air quality lookups.
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Fetches current air quality conditions for a location given as a
    /// place name or `lat,lng` coordinates.
    async fn get_air_quality(&self, location: &str) -> Result<serde_json::Value, ProviderError>;
}

/// External data provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Network error reaching the service.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("service returned status {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body or reason.
        message: String,
    },

    /// Failed to parse the service's response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The service reported a failure in an otherwise successful reply.
    #[error("service reported {status}: {message}")]
    Api {
        /// Vendor status string, e.g. `REQUEST_DENIED`.
        status: String,
        /// Accompanying vendor message.
        message: String,
    },

    /// The request was rejected before reaching the service.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ProviderError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an HTTP status error.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a vendor status error.
    pub fn api(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}
