//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GREENROUTE_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use greenroute::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Reasoning model: {}", config.engine.model);
//! ```

mod agent;
mod engine;
mod error;
mod providers;

pub use agent::AgentConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use providers::ProvidersConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for GreenRoute.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Reasoning engine configuration (OpenAI)
    #[serde(default)]
    pub engine: EngineConfig,

    /// External data provider configuration (maps, weather, air quality)
    #[serde(default)]
    pub providers: ProvidersConfig,

    /// Orchestration loop configuration
    #[serde(default)]
    pub agent: AgentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GREENROUTE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GREENROUTE__ENGINE__OPENAI_API_KEY=sk-...` -> `engine.openai_api_key`
    /// - `GREENROUTE__AGENT__MAX_ITERATIONS=5` -> `agent.max_iterations = 5`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GREENROUTE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid,
    /// including missing API keys for the engine or any data provider.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.providers.validate()?;
        self.agent.validate()?;
        Ok(())
    }
}
