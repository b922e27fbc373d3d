//! Travel Data Tools - External data lookups the agent can request.
//!
//! Three tools cover the data the agent reasons over: directions between
//! the endpoints, current weather, and current air quality. Tool names
//! and descriptions are part of the agent's contract with the reasoning
//! engine; changing them changes which calls the engine produces.

use serde::{Deserialize, Serialize};

use crate::domain::agent::tools::{ParameterSpec, ParameterType, ToolSpec};

/// Name of the directions tool.
pub const DIRECTIONS_TOOL_NAME: &str = "google_maps_directions";

/// Name of the weather tool.
pub const WEATHER_TOOL_NAME: &str = "weather_api";

/// Name of the air quality tool.
pub const AIR_QUALITY_TOOL_NAME: &str = "air_quality_api";

// ═══════════════════════════════════════════════════════════════════════════
// Tool Parameters
// ═══════════════════════════════════════════════════════════════════════════

fn default_mode() -> String {
    "driving".to_string()
}

/// Parameters for the directions tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsParams {
    /// Starting location
    pub origin: String,
    /// Ending location
    pub destination: String,
    /// Mode of transportation
    #[serde(default = "default_mode")]
    pub mode: String,
}

/// Parameters for the weather tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherParams {
    /// Location as a place name or coordinates
    pub location: String,
}

/// Parameters for the air quality tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityParams {
    /// Location as a place name or coordinates
    pub location: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Tool Specifications
// ═══════════════════════════════════════════════════════════════════════════

/// Creates the google_maps_directions tool specification.
pub fn directions_tool() -> ToolSpec {
    ToolSpec::new(
        DIRECTIONS_TOOL_NAME,
        "Use this tool to get directions between two locations. Provide the origin \
         (starting location), destination (ending location), and optionally the mode \
         of transportation (driving, walking, bicycling, transit).",
        vec![
            ParameterSpec::required("origin", ParameterType::String),
            ParameterSpec::required("destination", ParameterType::String),
            ParameterSpec::optional("mode", ParameterType::String)
                .with_default(serde_json::json!("driving")),
        ],
    )
}

/// Creates the weather_api tool specification.
pub fn weather_tool() -> ToolSpec {
    ToolSpec::new(
        WEATHER_TOOL_NAME,
        "Use this tool to get current weather information for a location. Provide \
         the location as a string like \"Berkeley, CA\" or coordinates.",
        vec![ParameterSpec::required("location", ParameterType::String)],
    )
}

/// Creates the air_quality_api tool specification.
pub fn air_quality_tool() -> ToolSpec {
    ToolSpec::new(
        AIR_QUALITY_TOOL_NAME,
        "Use this tool to get air quality information for a location. Provide the \
         location as a string like \"Berkeley, CA\" or coordinates.",
        vec![ParameterSpec::required("location", ParameterType::String)],
    )
}

/// Returns all travel data tool specifications, in presentation order.
pub fn all_travel_data_tools() -> Vec<ToolSpec> {
    vec![directions_tool(), weather_tool(), air_quality_tool()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_travel_data_tools_returns_three_tools() {
        let tools = all_travel_data_tools();
        assert_eq!(tools.len(), 3);
    }

    #[test]
    fn tool_specifications_have_correct_names() {
        let tools = all_travel_data_tools();
        let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();

        assert_eq!(
            names,
            vec!["google_maps_directions", "weather_api", "air_quality_api"]
        );
    }

    #[test]
    fn directions_tool_requires_origin_and_destination() {
        let schema = directions_tool().parameters_schema();

        assert_eq!(
            schema["required"],
            serde_json::json!(["origin", "destination"])
        );
        assert_eq!(schema["properties"]["mode"]["type"], "string");
    }

    #[test]
    fn directions_mode_defaults_to_driving() {
        let spec = directions_tool();
        let mode = spec
            .parameters()
            .iter()
            .find(|p| p.name() == "mode")
            .unwrap();

        assert_eq!(mode.default(), Some(&serde_json::json!("driving")));
        assert!(!mode.is_required());
    }

    #[test]
    fn location_tools_require_location() {
        for spec in [weather_tool(), air_quality_tool()] {
            let schema = spec.parameters_schema();
            assert_eq!(schema["required"], serde_json::json!(["location"]));
        }
    }

    #[test]
    fn directions_params_fill_default_mode() {
        let params: DirectionsParams = serde_json::from_value(serde_json::json!({
            "origin": "Berkeley, CA",
            "destination": "San Francisco, CA",
        }))
        .unwrap();

        assert_eq!(params.mode, "driving");
    }

    #[test]
    fn descriptions_explain_when_to_use_each_tool() {
        assert!(directions_tool().description().contains("directions"));
        assert!(weather_tool().description().contains("weather"));
        assert!(air_quality_tool().description().contains("air quality"));
    }
}
