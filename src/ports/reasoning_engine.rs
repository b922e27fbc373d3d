//! Reasoning Engine Port - Interface for LLM-backed reasoning.
//!
//! This port abstracts the model provider behind the orchestration loop.
//! The loop hands the engine the full run context and gets back a single
//! decision: call a tool, or finish with an answer. The engine never
//! executes tools itself.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct MockEngine;
//!
//! #[async_trait]
//! impl ReasoningEngine for MockEngine {
//!     async fn decide(&self, _request: ReasoningRequest) -> Result<NextAction, EngineError> {
//!         Ok(NextAction::Finish("PRIMARY RECOMMENDATION: take the train.".to_string()))
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::domain::agent::tools::{ToolCall, ToolInvocation, ToolSpec};

/// Port for the model provider that drives the agent's reasoning.
///
/// Implementations connect to an LLM service and translate between its
/// API and the loop's decision types.
#[async_trait]
pub trait ReasoningEngine: Send + Sync {
    /// Produces the next action for a run.
    ///
    /// The request carries the whole run context, so implementations can
    /// stay stateless across calls.
    async fn decide(&self, request: ReasoningRequest) -> Result<NextAction, EngineError>;
}

/// Context handed to the engine for one reasoning step.
#[derive(Debug, Clone)]
pub struct ReasoningRequest {
    /// Instructions that frame the engine's role.
    pub system_prompt: String,
    /// The user's task, as composed natural language.
    pub task: String,
    /// Tools the engine may call.
    pub tools: Vec<ToolSpec>,
    /// Tool calls already made during this run, oldest first.
    pub history: Vec<ToolInvocation>,
}

impl ReasoningRequest {
    /// Creates a request with no tools and no history.
    pub fn new(system_prompt: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            task: task.into(),
            tools: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Sets the tools the engine may call.
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = tools;
        self
    }

    /// Sets the tool call history for this run.
    pub fn with_history(mut self, history: Vec<ToolInvocation>) -> Self {
        self.history = history;
        self
    }
}

/// The engine's decision for one step.
#[derive(Debug, Clone, PartialEq)]
pub enum NextAction {
    /// Invoke a tool and continue reasoning with its result.
    CallTool(ToolCall),
    /// Stop with a final answer.
    Finish(String),
}

impl NextAction {
    /// Returns true if this action ends the run.
    pub fn is_finish(&self) -> bool {
        matches!(self, Self::Finish(_))
    }
}

/// Reasoning engine errors.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u64,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },
}

impl EngineError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u64) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}
