//! GreenRoute - Eco-Friendly Travel Recommendations
//!
//! This crate orchestrates a tool-calling reasoning engine over directions,
//! weather, and air quality data to produce structured travel recommendations.
//!
//! The one-call entry point for embedding callers:
//!
//! ```no_run
//! use greenroute::get_eco_travel_recommendations;
//!
//! # async fn demo() {
//! let output = get_eco_travel_recommendations("Berkeley, CA", "San Francisco, CA", None).await;
//! println!("{}", output.recommendation_text);
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use application::get_eco_travel_recommendations;
pub use domain::travel::{RecommendationOutput, TravelPreferences};
