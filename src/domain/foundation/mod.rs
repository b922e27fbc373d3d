//! Foundation module - Shared domain primitives.
//!
//! Contains the identifier and timestamp value objects that form the
//! vocabulary of the GreenRoute domain.

mod ids;
mod timestamp;

pub use ids::{InvocationId, RunId};
pub use timestamp::Timestamp;
