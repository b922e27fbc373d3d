//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Reasoning Ports
//!
//! - `ReasoningEngine` - Port for the LLM provider driving the agent
//!
//! ## Data Provider Ports
//!
//! - `DirectionsProvider` - Route lookups between two locations
//! - `WeatherProvider` - Current weather conditions
//! - `AirQualityProvider` - Current air quality conditions

mod data_provider;
mod reasoning_engine;

pub use data_provider::{
    AirQualityProvider, DirectionsProvider, ProviderError, WeatherProvider,
};
pub use reasoning_engine::{EngineError, NextAction, ReasoningEngine, ReasoningRequest};
