//! RecommendHandler - Produce an eco-travel recommendation for one trip

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::ai::{OpenAIEngine, OpenAIEngineConfig};
use crate::adapters::air_quality::{GoogleAirQuality, GoogleAirQualityConfig};
use crate::adapters::directions::{GoogleMapsConfig, GoogleMapsDirections};
use crate::adapters::tools::{AirQualityTool, DirectionsTool, WeatherTool};
use crate::adapters::weather::{WeatherApi, WeatherApiConfig};
use crate::config::{AgentConfig, AppConfig};
use crate::domain::agent::tools::definitions::{air_quality_tool, directions_tool, weather_tool};
use crate::domain::agent::tools::ToolRegistry;
use crate::domain::agent::{Orchestrator, SYSTEM_PROMPT};
use crate::domain::travel::{
    RecommendationOutput, RequestComposer, ResponseFormatter, TravelPreferences, TravelRequest,
};
use crate::ports::{AirQualityProvider, DirectionsProvider, ReasoningEngine, WeatherProvider};

/// Command to produce a recommendation for one trip
#[derive(Debug, Clone)]
pub struct RecommendCommand {
    pub origin: String,
    pub destination: String,
    pub preferences: Option<TravelPreferences>,
}

/// Handler that runs the recommendation agent for one travel request.
///
/// Each call gets its own tool registry and invocation log, so nothing
/// leaks between runs sharing a handler.
pub struct RecommendHandler<E: ?Sized + ReasoningEngine> {
    engine: Arc<E>,
    directions: Arc<dyn DirectionsProvider>,
    weather: Arc<dyn WeatherProvider>,
    air_quality: Arc<dyn AirQualityProvider>,
    config: AgentConfig,
}

impl<E: ?Sized + ReasoningEngine> RecommendHandler<E> {
    pub fn new(
        engine: Arc<E>,
        directions: Arc<dyn DirectionsProvider>,
        weather: Arc<dyn WeatherProvider>,
        air_quality: Arc<dyn AirQualityProvider>,
        config: AgentConfig,
    ) -> Self {
        Self {
            engine,
            directions,
            weather,
            air_quality,
            config,
        }
    }

    /// Produce a recommendation for the commanded trip.
    ///
    /// Never returns an error: engine faults, tool faults, exhaustion,
    /// and timeouts all surface as an output with `success = false`.
    pub async fn handle(&self, cmd: RecommendCommand) -> RecommendationOutput {
        let mut request = TravelRequest::new(cmd.origin, cmd.destination);
        if let Some(preferences) = cmd.preferences {
            request = request.with_preferences(preferences);
        }

        let task = RequestComposer::compose(&request);

        tracing::info!(
            origin = %request.origin,
            destination = %request.destination,
            "starting recommendation run"
        );

        self.run_orchestration(&task, self.config.run_timeout())
            .await
    }

    async fn run_orchestration(
        &self,
        task: &str,
        limit: Option<Duration>,
    ) -> RecommendationOutput {
        let orchestrator = Orchestrator::new(
            self.engine.clone(),
            self.build_registry(),
            SYSTEM_PROMPT,
            self.config.max_iterations,
        );

        let outcome = match limit {
            Some(limit) => match tokio::time::timeout(limit, orchestrator.run(task)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(limit = ?limit, "recommendation run timed out");
                    return RecommendationOutput::incomplete(
                        format!("No recommendation could be produced: run timed out after {:?}", limit),
                        serde_json::Map::new(),
                    );
                }
            },
            None => orchestrator.run(task).await,
        };

        ResponseFormatter::format(outcome)
    }

    fn build_registry(&self) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(
            directions_tool(),
            Arc::new(DirectionsTool::new(self.directions.clone())),
        );
        registry.register(
            weather_tool(),
            Arc::new(WeatherTool::new(self.weather.clone())),
        );
        registry.register(
            air_quality_tool(),
            Arc::new(AirQualityTool::new(self.air_quality.clone())),
        );
        registry
    }
}

/// Produce an eco-travel recommendation with services built from the
/// environment.
///
/// Convenience entry point for embedding callers: loads [`AppConfig`],
/// wires the OpenAI engine and the three live data providers, and runs
/// one recommendation. Never returns an error; configuration problems
/// surface as an output with `success = false`.
pub async fn get_eco_travel_recommendations(
    origin: impl Into<String>,
    destination: impl Into<String>,
    preferences: Option<TravelPreferences>,
) -> RecommendationOutput {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration could not be loaded");
            return RecommendationOutput::incomplete(
                format!("No recommendation could be produced: {}", e),
                serde_json::Map::new(),
            );
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "configuration is invalid");
        return RecommendationOutput::incomplete(
            format!("No recommendation could be produced: {}", e),
            serde_json::Map::new(),
        );
    }

    let handler = build_live_handler(&config);
    handler
        .handle(RecommendCommand {
            origin: origin.into(),
            destination: destination.into(),
            preferences,
        })
        .await
}

/// Wire the live adapters from validated configuration.
pub fn build_live_handler(config: &AppConfig) -> RecommendHandler<OpenAIEngine> {
    let engine_config =
        OpenAIEngineConfig::new(config.engine.openai_api_key.clone().unwrap_or_default())
            .with_model(config.engine.model.clone())
            .with_base_url(config.engine.base_url.clone())
            .with_timeout(config.engine.timeout());

    let directions_config =
        GoogleMapsConfig::new(config.providers.google_maps_api_key.clone().unwrap_or_default())
            .with_base_url(config.providers.maps_base_url.clone())
            .with_timeout(config.providers.timeout());

    let weather_config =
        WeatherApiConfig::new(config.providers.weather_api_key.clone().unwrap_or_default())
            .with_base_url(config.providers.weather_base_url.clone())
            .with_timeout(config.providers.timeout());

    let air_quality_config =
        GoogleAirQualityConfig::new(config.providers.air_quality_api_key.clone().unwrap_or_default())
            .with_base_url(config.providers.air_quality_base_url.clone())
            .with_maps_base_url(config.providers.maps_base_url.clone())
            .with_timeout(config.providers.timeout());

    RecommendHandler::new(
        Arc::new(OpenAIEngine::new(engine_config)),
        Arc::new(GoogleMapsDirections::new(directions_config)),
        Arc::new(WeatherApi::new(weather_config)),
        Arc::new(GoogleAirQuality::new(air_quality_config)),
        config.agent.clone(),
    )
}
