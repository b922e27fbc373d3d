//! Agent - Tool-calling orchestration for travel recommendations.
//!
//! The agent owns the reasoning loop: it presents the travel data tools
//! to a reasoning engine, executes the tool calls the engine asks for,
//! and collects the run's outcome. The engine is reached only through
//! the `ReasoningEngine` port, so the whole module runs identically
//! against a live model or a scripted mock.
//!
//! ## Key Types
//!
//! - [`Orchestrator`] - Drives one task to a terminal state
//! - [`RunOutcome`] / [`Terminal`] - How a run ended, plus its call log
//! - [`SYSTEM_PROMPT`] - Instructions framing the engine's role
//! - [`tools`] - Tool specifications, registry, and invocation records

pub mod tools;

mod orchestrator;
mod outcome;
mod prompts;

pub use orchestrator::Orchestrator;
pub use outcome::{RunOutcome, Terminal};
pub use prompts::SYSTEM_PROMPT;
