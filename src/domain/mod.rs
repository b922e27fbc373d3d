//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs)
//! - `travel` - Travel requests, composition, and recommendation output
//! - `agent` - Tool-calling orchestration loop and tool registry

pub mod agent;
pub mod foundation;
pub mod travel;
