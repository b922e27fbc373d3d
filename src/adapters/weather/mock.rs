//! Mock Weather Provider for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{ProviderError, WeatherProvider};

/// Mock weather provider for testing.
///
/// Returns queued responses in order; once the queue is empty, a minimal
/// canned observation is returned.
#[derive(Debug, Clone, Default)]
pub struct MockWeatherProvider {
    responses: Arc<Mutex<VecDeque<Result<serde_json::Value, ProviderError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockWeatherProvider {
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
impl WeatherProvider for MockWeatherProvider {
    async fn get_current_weather(&self, location: &str) -> Result<serde_json::Value, ProviderError> {
        self.calls.lock().unwrap().push(location.to_string());

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(serde_json::json!({
                    "location": {"name": location},
                    "current": {"temp_c": 15.0, "condition": {"text": "Partly cloudy"}},
                }))
            })
    }
}
