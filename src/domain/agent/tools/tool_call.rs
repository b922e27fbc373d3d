//! Tool call and tool output value objects.
//!
//! A [`ToolCall`] is the reasoning engine's request to invoke a tool; a
//! [`ToolOutput`] is what the registry hands back: either the tool's JSON
//! result or an [`ErrorResult`]. Faults never cross the registry boundary
//! in any other shape.

use serde::{Deserialize, Serialize};

/// A request to invoke a tool.
///
/// Arguments are a JSON object to support the varying schemas of
/// different tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to invoke
    name: String,

    /// Arguments for the tool
    arguments: serde_json::Map<String, serde_json::Value>,
}

impl ToolCall {
    /// Creates a new tool call.
    pub fn new(
        name: impl Into<String>,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Returns the tool name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the arguments.
    pub fn arguments(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.arguments
    }

    /// Consumes self and returns the arguments.
    pub fn into_arguments(self) -> serde_json::Map<String, serde_json::Value> {
        self.arguments
    }
}

/// Error substituted for a tool's normal result when the call fails.
///
/// Serializes as `{"error": "..."}` so the reasoning engine sees the
/// failure as ordinary data it can route around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    error: String,
}

impl ErrorResult {
    /// Creates an error result with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.error
    }
}

/// Outcome of one tool invocation: the tool's JSON result or an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    /// The tool's normal JSON result
    Value(serde_json::Value),

    /// The tool failed; the error stands in for the result
    Error(ErrorResult),
}

impl ToolOutput {
    /// Creates a successful output.
    pub fn value(value: serde_json::Value) -> Self {
        Self::Value(value)
    }

    /// Creates a failed output.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorResult::new(message))
    }

    /// Returns true if this output is an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the error message, if this output is an error.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Value(_) => None,
            Self::Error(e) => Some(e.message()),
        }
    }

    /// Renders the output as a JSON value.
    ///
    /// Errors render as their `{"error": "..."}` shape.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Value(value) => value.clone(),
            Self::Error(e) => serde_json::json!({ "error": e.message() }),
        }
    }
}
