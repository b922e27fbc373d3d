//! Mock Reasoning Engine for testing.
//!
//! Provides a configurable mock implementation of the ReasoningEngine
//! port, allowing tests to script a run without calling a real model.
//!
//! # Features
//!
//! - Pre-configured decisions, consumed in order
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let engine = MockEngine::new()
//!     .with_tool_call("weather_api", serde_json::json!({"location": "Berkeley, CA"}))
//!     .with_finish("PRIMARY RECOMMENDATION: take BART.");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::agent::tools::ToolCall;
use crate::ports::{EngineError, NextAction, ReasoningEngine, ReasoningRequest};

/// Mock reasoning engine for testing.
///
/// Configurable to return scripted decisions, simulate delays, or inject
/// errors.
#[derive(Debug, Clone)]
pub struct MockEngine {
    /// Pre-configured decisions (consumed in order).
    decisions: Arc<Mutex<VecDeque<MockDecision>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<ReasoningRequest>>>,
}

/// A scripted engine decision.
#[derive(Debug, Clone)]
pub enum MockDecision {
    /// Ask for a tool call.
    CallTool {
        name: String,
        arguments: serde_json::Map<String, serde_json::Value>,
    },
    /// Finish with an answer.
    Finish(String),
    /// Fail with an error.
    Error(MockEngineError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockEngineError {
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u64 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u64 },
}

impl From<MockEngineError> for EngineError {
    fn from(err: MockEngineError) -> Self {
        match err {
            MockEngineError::AuthenticationFailed => EngineError::AuthenticationFailed,
            MockEngineError::RateLimited { retry_after_secs } => {
                EngineError::rate_limited(retry_after_secs)
            }
            MockEngineError::Unavailable { message } => EngineError::unavailable(message),
            MockEngineError::Network { message } => EngineError::network(message),
            MockEngineError::Timeout { timeout_secs } => EngineError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEngine {
    /// Creates a new mock engine with no scripted decisions.
    pub fn new() -> Self {
        Self {
            decisions: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a tool call decision to the script.
    ///
    /// Accepts any JSON value for convenience; non-object values become
    /// empty argument maps.
    pub fn with_tool_call(self, name: impl Into<String>, arguments: serde_json::Value) -> Self {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        let mut decisions = self.decisions.lock().unwrap();
        decisions.push_back(MockDecision::CallTool {
            name: name.into(),
            arguments,
        });
        drop(decisions);
        self
    }

    /// Adds a finish decision to the script.
    pub fn with_finish(self, text: impl Into<String>) -> Self {
        let mut decisions = self.decisions.lock().unwrap();
        decisions.push_back(MockDecision::Finish(text.into()));
        drop(decisions);
        self
    }

    /// Adds an error to the script.
    pub fn with_error(self, error: MockEngineError) -> Self {
        let mut decisions = self.decisions.lock().unwrap();
        decisions.push_back(MockDecision::Error(error));
        drop(decisions);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this engine.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<ReasoningRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next scripted decision or a default finish.
    fn next_decision(&self) -> MockDecision {
        self.decisions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockDecision::Finish("Mock recommendation".to_string()))
    }
}

#[async_trait]
impl ReasoningEngine for MockEngine {
    async fn decide(&self, request: ReasoningRequest) -> Result<NextAction, EngineError> {
        // Record the call
        self.calls.lock().unwrap().push(request);

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        // Get scripted decision
        match self.next_decision() {
            MockDecision::CallTool { name, arguments } => {
                Ok(NextAction::CallTool(ToolCall::new(name, arguments)))
            }
            MockDecision::Finish(text) => Ok(NextAction::Finish(text)),
            MockDecision::Error(err) => Err(err.into()),
        }
    }
}
