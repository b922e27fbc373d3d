//! Tool registry.
//!
//! Maps tool names to their specifications and handlers, and runs tool
//! calls on behalf of the orchestration loop. `invoke` absorbs every
//! fault class into a [`ToolOutput`] error: an unknown tool, arguments
//! that fail schema validation, and handler failures all come back as
//! `{"error": "..."}` data rather than propagating.

use std::sync::Arc;

use async_trait::async_trait;

use super::tool_call::ToolOutput;
use super::tool_spec::ToolSpec;

/// Failure raised by a tool handler.
///
/// Carries only a message; the registry converts it into error data at
/// the invocation boundary, so no richer structure survives anyway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ToolError(String);

impl ToolError {
    /// Creates a tool error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Executes one tool's logic.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Runs the tool with validated arguments.
    async fn call(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<serde_json::Value, ToolError>;
}

struct RegisteredTool {
    spec: ToolSpec,
    handler: Arc<dyn ToolHandler>,
}

/// Registry of the tools available to a run.
///
/// Tools are listed in registration order, which keeps the tool surface
/// presented to the reasoning engine stable across runs.
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<RegisteredTool>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a tool, replacing any existing tool with the same name.
    pub fn register(&mut self, spec: ToolSpec, handler: Arc<dyn ToolHandler>) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|entry| entry.spec.name() == spec.name())
        {
            existing.spec = spec;
            existing.handler = handler;
        } else {
            self.entries.push(RegisteredTool { spec, handler });
        }
    }

    /// Returns the registered specifications in registration order.
    pub fn list(&self) -> Vec<&ToolSpec> {
        self.entries.iter().map(|entry| &entry.spec).collect()
    }

    /// Returns cloned specifications for handing to a reasoning engine.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.entries.iter().map(|entry| entry.spec.clone()).collect()
    }

    /// Returns true if a tool with the given name is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.spec.name() == name)
    }

    /// Returns the number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.entries.len()
    }

    /// Invokes a tool by name.
    ///
    /// Never fails: unknown tools, invalid arguments, and handler errors
    /// all produce an error output the caller can record and continue
    /// from.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> ToolOutput {
        let Some(entry) = self
            .entries
            .iter()
            .find(|entry| entry.spec.name() == name)
        else {
            tracing::warn!(tool = name, "unknown tool requested");
            return ToolOutput::error(format!("Tool '{}' not found", name));
        };

        let validated = match entry.spec.validate_arguments(&arguments) {
            Ok(validated) => validated,
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool arguments rejected");
                return ToolOutput::error(e.to_string());
            }
        };

        tracing::debug!(tool = name, "invoking tool");
        match entry.handler.call(validated).await {
            Ok(value) => ToolOutput::value(value),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool handler failed");
                ToolOutput::error(e.message())
            }
        }
    }
}
