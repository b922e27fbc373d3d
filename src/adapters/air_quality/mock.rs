//! Mock Air Quality Provider for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AirQualityProvider, ProviderError};

/// Mock air quality provider for testing.
///
/// Returns queued responses in order; once the queue is empty, a minimal
/// canned conditions report is returned.
#[derive(Debug, Clone, Default)]
pub struct MockAirQualityProvider {
    responses: Arc<Mutex<VecDeque<Result<serde_json::Value, ProviderError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAirQualityProvider {
    /// Creates a mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, response: serde_json::Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Returns the number of lookups made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the locations looked up, in order.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AirQualityProvider for MockAirQualityProvider {
    async fn get_air_quality(&self, location: &str) -> Result<serde_json::Value, ProviderError> {
        self.calls.lock().unwrap().push(location.to_string());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(serde_json::json!({
                    "indexes": [{"code": "uaqi", "aqi": 42, "category": "Good air quality"}],
                }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_queued_then_canned() {
        let provider = MockAirQualityProvider::new()
            .with_response(serde_json::json!({"indexes": [{"aqi": 120}]}));

        let first = provider.get_air_quality("Berkeley, CA").await.unwrap();
        let second = provider.get_air_quality("Berkeley, CA").await.unwrap();

        assert_eq!(first["indexes"][0]["aqi"], 120);
        assert_eq!(second["indexes"][0]["aqi"], 42);
    }

    #[tokio::test]
    async fn mock_records_locations_and_errors() {
        let provider =
            MockAirQualityProvider::new().with_error(ProviderError::network("unreachable"));

        let result = provider.get_air_quality("Oakland, CA").await;

        assert_eq!(result, Err(ProviderError::network("unreachable")));
        assert_eq!(provider.get_calls(), vec!["Oakland, CA"]);
    }
}
