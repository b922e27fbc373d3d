//! Air Quality Adapters.
//!
//! Implementations of the AirQualityProvider port.
//!
//! ## Available Adapters
//!
//! - `GoogleAirQuality` - Google Air Quality API with geocoding
//! - `MockAirQualityProvider` - Queue-driven mock for testing

mod google_air_quality;
mod mock;

pub use google_air_quality::{GoogleAirQuality, GoogleAirQualityConfig};
pub use mock::MockAirQualityProvider;
