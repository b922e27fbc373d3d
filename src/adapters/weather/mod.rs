//! Weather Adapters.
//!
//! Implementations of the WeatherProvider port.
//!
//! ## Available Adapters
//!
//! - `WeatherApi` - weatherapi.com current conditions
//! - `MockWeatherProvider` - Queue-driven mock for testing

mod mock;
mod weather_api;

pub use mock::MockWeatherProvider;
pub use weather_api::{WeatherApi, WeatherApiConfig};
