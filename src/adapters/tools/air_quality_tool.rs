//! Air quality tool handler.
//!
//! Bridges the `air_quality_api` tool to an AirQualityProvider.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::agent::tools::definitions::AirQualityParams;
use crate::domain::agent::tools::{ToolError, ToolHandler};
use crate::ports::AirQualityProvider;

/// Handler backing the `air_quality_api` tool.
pub struct AirQualityTool {
    provider: Arc<dyn AirQualityProvider>,
}

impl AirQualityTool {
    /// Creates a handler over an air quality provider.
    pub fn new(provider: Arc<dyn AirQualityProvider>) -> Self {
        Self { provider }
    }

    fn error(e: impl std::fmt::Display) -> ToolError {
        ToolError::new(format!("Error processing Air Quality API: {}", e))
    }
}

#[async_trait]
impl ToolHandler for AirQualityTool {
    async fn call(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: AirQualityParams =
            serde_json::from_value(serde_json::Value::Object(arguments)).map_err(Self::error)?;

        // Models sometimes pad locations with whitespace
        self.provider
            .get_air_quality(params.location.trim())
            .await
            .map_err(Self::error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::air_quality::MockAirQualityProvider;
    use crate::ports::ProviderError;

    fn args(json: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match json {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn returns_provider_conditions() {
        let provider = Arc::new(
            MockAirQualityProvider::new()
                .with_response(serde_json::json!({"indexes": [{"aqi": 55}]})),
        );
        let tool = AirQualityTool::new(provider);

        let conditions = tool
            .call(args(serde_json::json!({"location": "Berkeley, CA"})))
            .await
            .unwrap();

        assert_eq!(conditions["indexes"][0]["aqi"], 55);
    }

    #[tokio::test]
    async fn location_is_trimmed_before_lookup() {
        let provider = Arc::new(MockAirQualityProvider::new());
        let tool = AirQualityTool::new(provider.clone());

        tool.call(args(serde_json::json!({"location": " San Francisco, CA "})))
            .await
            .unwrap();

        assert_eq!(provider.get_calls(), vec!["San Francisco, CA"]);
    }

    #[tokio::test]
    async fn provider_failure_is_prefixed() {
        let provider = Arc::new(
            MockAirQualityProvider::new()
                .with_error(ProviderError::api("ZERO_RESULTS", "no geocoding results")),
        );
        let tool = AirQualityTool::new(provider);

        let err = tool
            .call(args(serde_json::json!({"location": "Nowhere"})))
            .await
            .unwrap_err();

        assert_eq!(
            err.message(),
            "Error processing Air Quality API: service reported ZERO_RESULTS: no geocoding results"
        );
    }
}
