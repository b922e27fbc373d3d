//! Tool Definitions - Specifications for the agent's tools.
//!
//! Each submodule declares the specifications for one group of tools.
//!
//! - [`travel_data`] - Directions, weather, and air quality lookups

pub mod travel_data;

pub use travel_data::*;
