//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers receive their collaborators through constructor injection and
//! never construct live services themselves; the composition helpers at the
//! bottom of [`recommend`] wire production adapters from configuration.

pub mod recommend;

pub use recommend::{
    build_live_handler, get_eco_travel_recommendations, RecommendCommand, RecommendHandler,
};
