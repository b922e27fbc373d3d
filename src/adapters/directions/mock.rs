//! Mock Directions Provider for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{DirectionsProvider, ProviderError};

/// Arguments of one recorded directions lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsCall {
    pub origin: String,
    pub destination: String,
    pub mode: String,
}

/// Mock directions provider for testing.
///
/// Returns queued responses in order; once the queue is empty, a minimal
/// canned route is returned.
#[derive(Debug, Clone, Default)]
pub struct MockDirectionsProvider {
    responses: Arc<Mutex<VecDeque<Result<serde_json::Value, ProviderError>>>>,
    calls: Arc<Mutex<Vec<DirectionsCall>>>,
}

impl MockDirectionsProvider {
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

    /// Returns all recorded lookups.
    pub fn get_calls(&self) -> Vec<DirectionsCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectionsProvider for MockDirectionsProvider {
    async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
        mode: &str,
    ) -> Result<serde_json::Value, ProviderError> {
        self.calls.lock().unwrap().push(DirectionsCall {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode: mode.to_string(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(serde_json::json!([
                    {"summary": "Mock route", "legs": [{"distance": {"text": "1 km"}}]}
                ]))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_queued_responses_in_order() {
        let provider = MockDirectionsProvider::new()
            .with_response(serde_json::json!([{"summary": "first"}]))
            .with_error(ProviderError::network("down"));

        let first = provider.get_directions("a", "b", "transit").await.unwrap();
        let second = provider.get_directions("a", "b", "transit").await;

        assert_eq!(first[0]["summary"], "first");
        assert_eq!(second, Err(ProviderError::network("down")));
    }

    #[tokio::test]
    async fn mock_records_call_arguments() {
        let provider = MockDirectionsProvider::new();

        provider
            .get_directions("Berkeley, CA", "San Francisco, CA", "transit")
            .await
            .unwrap();

        assert_eq!(provider.call_count(), 1);
        assert_eq!(
            provider.get_calls()[0],
            DirectionsCall {
                origin: "Berkeley, CA".to_string(),
                destination: "San Francisco, CA".to_string(),
                mode: "transit".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn mock_returns_canned_route_when_queue_empty() {
        let provider = MockDirectionsProvider::new();

        let routes = provider.get_directions("a", "b", "driving").await.unwrap();

        assert_eq!(routes[0]["summary"], "Mock route");
    }
}
