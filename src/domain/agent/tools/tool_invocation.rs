//! Tool invocation records and the per-run call log.
//!
//! Every tool call a run makes is recorded as a [`ToolInvocation`] and
//! appended to the run's [`ToolCallLog`] once its outcome is known. The
//! log is append-only: entries are never updated or removed, so it reads
//! as a faithful chronological account of the run.

use serde::Serialize;

use crate::domain::foundation::{InvocationId, Timestamp};

use super::tool_call::ToolOutput;

/// Record of a single tool invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInvocation {
    /// Unique identifier for this invocation
    id: InvocationId,

    /// Name of the invoked tool
    tool_name: String,

    /// Arguments passed to the tool
    arguments: serde_json::Map<String, serde_json::Value>,

    /// Outcome of the invocation
    output: ToolOutput,

    /// When the invocation started
    invoked_at: Timestamp,

    /// When the invocation completed
    completed_at: Timestamp,

    /// Wall-clock duration in milliseconds
    duration_ms: u64,
}

impl ToolInvocation {
    /// Starts a new invocation record.
    ///
    /// The output is a placeholder until [`complete`](Self::complete) is
    /// called with the real outcome.
    pub fn new(
        tool_name: impl Into<String>,
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: InvocationId::new(),
            tool_name: tool_name.into(),
            arguments,
            output: ToolOutput::value(serde_json::Value::Null),
            invoked_at: now,
            completed_at: now,
            duration_ms: 0,
        }
    }

    /// Records the invocation's outcome and completion time.
    pub fn complete(&mut self, output: ToolOutput) {
        self.output = output;
        self.completed_at = Timestamp::now();
        self.duration_ms = self.completed_at.millis_since(&self.invoked_at);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════

    pub fn id(&self) -> InvocationId {
        self.id
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn arguments(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.arguments
    }

    pub fn output(&self) -> &ToolOutput {
        &self.output
    }

    pub fn is_error(&self) -> bool {
        self.output.is_error()
    }

    pub fn invoked_at(&self) -> Timestamp {
        self.invoked_at
    }

    pub fn completed_at(&self) -> Timestamp {
        self.completed_at
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}

/// Append-only log of the tool invocations made during one run.
///
/// Entries are appended only after their outcome is recorded, so the log
/// never contains a partially-executed invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolCallLog {
    entries: Vec<ToolInvocation>,
}

impl ToolCallLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed invocation.
    pub fn append(&mut self, invocation: ToolInvocation) {
        self.entries.push(invocation);
    }

    /// Returns the entries in invocation order.
    pub fn entries(&self) -> &[ToolInvocation] {
        &self.entries
    }

    /// Returns the number of recorded invocations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no invocations are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the most recent entry.
    pub fn last(&self) -> Option<&ToolInvocation> {
        self.entries.last()
    }

    /// Collects each tool's most recent output, keyed by tool name.
    ///
    /// Keys appear in first-invocation order; repeated calls to the same
    /// tool keep the latest output. Error outputs are included in their
    /// `{"error": "..."}` shape.
    pub fn latest_outputs(&self) -> serde_json::Map<String, serde_json::Value> {
        let mut outputs = serde_json::Map::new();
        for entry in &self.entries {
            outputs.insert(entry.tool_name().to_string(), entry.output().to_json());
        }
        outputs
    }
}
