//! Directions tool handler.
//!
//! Bridges the `google_maps_directions` tool to a DirectionsProvider.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::agent::tools::definitions::DirectionsParams;
use crate::domain::agent::tools::{ToolError, ToolHandler};
use crate::ports::DirectionsProvider;

/// Handler backing the `google_maps_directions` tool.
pub struct DirectionsTool {
    provider: Arc<dyn DirectionsProvider>,
}

impl DirectionsTool {
    /// Creates a handler over a directions provider.
    pub fn new(provider: Arc<dyn DirectionsProvider>) -> Self {
        Self { provider }
    }

    fn error(e: impl std::fmt::Display) -> ToolError {
        ToolError::new(format!("Error processing Google Maps directions: {}", e))
    }
}

#[async_trait]
impl ToolHandler for DirectionsTool {
    async fn call(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: DirectionsParams =
            serde_json::from_value(serde_json::Value::Object(arguments)).map_err(Self::error)?;

        self.provider
            .get_directions(&params.origin, &params.destination, &params.mode)
            .await
            .map_err(Self::error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::directions::MockDirectionsProvider;
    use crate::ports::ProviderError;

    fn args(json: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match json {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn returns_provider_routes() {
        let provider = Arc::new(
            MockDirectionsProvider::new()
                .with_response(serde_json::json!([{"summary": "Bay Bridge"}])),
        );
        let tool = DirectionsTool::new(provider.clone());

        let routes = tool
            .call(args(serde_json::json!({
                "origin": "Berkeley, CA",
                "destination": "San Francisco, CA",
                "mode": "transit",
            })))
            .await
            .unwrap();

        assert_eq!(routes[0]["summary"], "Bay Bridge");
        assert_eq!(provider.get_calls()[0].mode, "transit");
    }

    #[tokio::test]
    async fn provider_failure_is_prefixed() {
        let provider = Arc::new(
            MockDirectionsProvider::new().with_error(ProviderError::network("connection refused")),
        );
        let tool = DirectionsTool::new(provider);

        let err = tool
            .call(args(serde_json::json!({
                "origin": "Berkeley, CA",
                "destination": "San Francisco, CA",
                "mode": "driving",
            })))
            .await
            .unwrap_err();

        assert_eq!(
            err.message(),
            "Error processing Google Maps directions: network error: connection refused"
        );
    }

    #[tokio::test]
    async fn missing_mode_falls_back_to_driving() {
        let provider = Arc::new(MockDirectionsProvider::new());
        let tool = DirectionsTool::new(provider.clone());

        tool.call(args(serde_json::json!({
            "origin": "A",
            "destination": "B",
        })))
        .await
        .unwrap();

        assert_eq!(provider.get_calls()[0].mode, "driving");
    }
}
