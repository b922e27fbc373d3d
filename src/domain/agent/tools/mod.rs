//! Agent Tools - Tool invocation surface for the orchestration loop.
//!
//! The reasoning engine never touches external services directly. It asks
//! for tool calls by name; the [`ToolRegistry`] validates the arguments,
//! runs the registered handler, and returns an outcome that is data either
//! way. Every call is recorded in the run's [`ToolCallLog`].
//!
//! ## Key Types
//!
//! - [`ToolSpec`] - Name, description, and parameter schema of a tool
//! - [`ToolCall`] - The engine's request to invoke a tool
//! - [`ToolOutput`] - Result data or an [`ErrorResult`], never a fault
//! - [`ToolInvocation`] - Record of one call for the audit log
//! - [`ToolCallLog`] - Append-only per-run invocation history
//! - [`ToolRegistry`] - Name-to-handler lookup and fault isolation
//! - [`ToolHandler`] - Trait implemented by tool adapters

pub mod definitions;

mod tool_call;
mod tool_invocation;
mod tool_registry;
mod tool_spec;

pub use tool_call::{ErrorResult, ToolCall, ToolOutput};
pub use tool_invocation::{ToolCallLog, ToolInvocation};
pub use tool_registry::{ToolError, ToolHandler, ToolRegistry};
pub use tool_spec::{ArgumentError, ParameterSpec, ParameterType, ToolSpec};
