//! Reasoning Engine Adapters.
//!
//! Implementations of the ReasoningEngine port.
//!
//! ## Available Adapters
//!
//! - `OpenAIEngine` - OpenAI chat completions with function calling
//! - `MockEngine` - Scripted mock for testing

mod mock_engine;
mod openai_engine;

pub use mock_engine::{MockDecision, MockEngine, MockEngineError};
pub use openai_engine::{OpenAIEngine, OpenAIEngineConfig};
