//! Travel - Request and response types for eco-travel recommendations.
//!
//! This module owns both ends of a recommendation: composing the user's
//! origin, destination, and preferences into the natural-language task
//! the agent works on, and formatting the agent's outcome into the
//! structured output callers receive.
//!
//! ## Key Types
//!
//! - [`TravelRequest`] / [`TravelPreferences`] - What the user asked for
//! - [`RequestComposer`] - Deterministic request-to-text composition
//! - [`RecommendationOutput`] - What callers get back
//! - [`ResponseFormatter`] - Outcome-to-output mapping and section checks
//! - [`REQUIRED_SECTIONS`] - Headers a complete recommendation must carry

mod composer;
mod formatter;
mod recommendation;
mod request;

pub use composer::RequestComposer;
pub use formatter::ResponseFormatter;
pub use recommendation::{RecommendationOutput, REQUIRED_SECTIONS};
pub use request::{TravelPreferences, TravelRequest};
