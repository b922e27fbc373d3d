//! Weather tool handler.
//!
//! Bridges the `weather_api` tool to a WeatherProvider.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::agent::tools::definitions::WeatherParams;
use crate::domain::agent::tools::{ToolError, ToolHandler};
use crate::ports::WeatherProvider;

/// Handler backing the `weather_api` tool.
pub struct WeatherTool {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherTool {
    /// Creates a handler over a weather provider.
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    fn error(e: impl std::fmt::Display) -> ToolError {
        ToolError::new(format!("Error processing Weather API: {}", e))
    }
}

#[async_trait]
impl ToolHandler for WeatherTool {
    async fn call(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: WeatherParams =
            serde_json::from_value(serde_json::Value::Object(arguments)).map_err(Self::error)?;

        // Models sometimes pad locations with whitespace
        self.provider
            .get_current_weather(params.location.trim())
            .await
            .map_err(Self::error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::weather::MockWeatherProvider;
    use crate::ports::ProviderError;

    fn args(json: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match json {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn returns_provider_observation() {
        let provider = Arc::new(
            MockWeatherProvider::new()
                .with_response(serde_json::json!({"current": {"temp_c": 18.5}})),
        );
        let tool = WeatherTool::new(provider);

        let observation = tool
            .call(args(serde_json::json!({"location": "Berkeley, CA"})))
            .await
            .unwrap();

        assert_eq!(observation["current"]["temp_c"], 18.5);
    }

    #[tokio::test]
    async fn location_is_trimmed_before_lookup() {
        let provider = Arc::new(MockWeatherProvider::new());
        let tool = WeatherTool::new(provider.clone());

        tool.call(args(serde_json::json!({"location": "  Berkeley, CA  "})))
            .await
            .unwrap();

        assert_eq!(provider.get_calls(), vec!["Berkeley, CA"]);
    }

    #[tokio::test]
    async fn provider_failure_is_prefixed() {
        let provider =
            Arc::new(MockWeatherProvider::new().with_error(ProviderError::http(502, "bad gateway")));
        let tool = WeatherTool::new(provider);

        let err = tool
            .call(args(serde_json::json!({"location": "Berkeley, CA"})))
            .await
            .unwrap_err();

        assert_eq!(
            err.message(),
            "Error processing Weather API: service returned status 502: bad gateway"
        );
    }
}
