//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Reasoning engine implementations (OpenAI, mock)
//! - `directions` - Route lookup via the Google Maps Directions API
//! - `weather` - Current conditions via WeatherAPI
//! - `air_quality` - Air quality via the Google Air Quality API
//! - `tools` - Tool handlers that bridge data providers into the agent

pub mod ai;
pub mod air_quality;
pub mod directions;
pub mod tools;
pub mod weather;
