//! Directions Adapters.
//!
//! Implementations of the DirectionsProvider port.
//!
//! ## Available Adapters
//!
//! - `GoogleMapsDirections` - Google Maps Directions API
//! - `MockDirectionsProvider` - Queue-driven mock for testing

mod google_maps;
mod mock;

pub use google_maps::{GoogleMapsConfig, GoogleMapsDirections};
pub use mock::{DirectionsCall, MockDirectionsProvider};
