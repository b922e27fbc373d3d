//! Orchestration loop for tool-calling runs.
//!
//! The orchestrator drives the reasoning engine one decision at a time:
//! each step either produces a tool call, which the registry executes and
//! the log records, or a final answer, which ends the run. A configurable
//! iteration bound guarantees termination even when the engine never
//! volunteers an answer.
//!
//! Tool failures stay inside the loop: the registry reports them as error
//! data and the next reasoning step sees them in the history. Only a
//! failure of the engine itself ends a run early.

use std::sync::Arc;

use crate::domain::agent::outcome::{RunOutcome, Terminal};
use crate::domain::agent::tools::{ToolCallLog, ToolInvocation, ToolRegistry};
use crate::domain::foundation::RunId;
use crate::ports::{NextAction, ReasoningEngine, ReasoningRequest};

/// Drives one task to completion against a reasoning engine and a set of
/// registered tools.
pub struct Orchestrator<E: ?Sized + ReasoningEngine> {
    engine: Arc<E>,
    registry: ToolRegistry,
    system_prompt: String,
    max_iterations: u32,
}

impl<E: ?Sized + ReasoningEngine> Orchestrator<E> {
    /// Creates an orchestrator.
    ///
    /// A bound of zero is legal and makes every run exhaust before its
    /// first reasoning step.
    pub fn new(
        engine: Arc<E>,
        registry: ToolRegistry,
        system_prompt: impl Into<String>,
        max_iterations: u32,
    ) -> Self {
        Self {
            engine,
            registry,
            system_prompt: system_prompt.into(),
            max_iterations,
        }
    }

    /// Returns the registered tools.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Runs a task to a terminal state.
    ///
    /// Always returns an outcome; engine failures become a `Failed`
    /// terminal rather than an error. The log gains an entry only after
    /// a tool call has resolved, so a run cancelled mid-call leaves no
    /// half-recorded invocation behind.
    pub async fn run(&self, task: &str) -> RunOutcome {
        let run_id = RunId::new();
        let mut log = ToolCallLog::new();
        let mut iterations: u32 = 0;

        loop {
            if iterations >= self.max_iterations {
                tracing::warn!(
                    run_id = %run_id,
                    iterations,
                    "iteration bound reached without a final answer"
                );
                return RunOutcome {
                    run_id,
                    terminal: Terminal::Exhausted,
                    iterations,
                    log,
                };
            }
            iterations += 1;

            let request = ReasoningRequest::new(self.system_prompt.clone(), task)
                .with_tools(self.registry.specs())
                .with_history(log.entries().to_vec());

            tracing::debug!(run_id = %run_id, iteration = iterations, "reasoning step");
            match self.engine.decide(request).await {
                Ok(NextAction::CallTool(call)) => {
                    let mut invocation =
                        ToolInvocation::new(call.name(), call.arguments().clone());
                    let output = self
                        .registry
                        .invoke(invocation.tool_name(), call.into_arguments())
                        .await;
                    invocation.complete(output);
                    tracing::debug!(
                        run_id = %run_id,
                        tool = invocation.tool_name(),
                        duration_ms = invocation.duration_ms(),
                        failed = invocation.is_error(),
                        "tool call completed"
                    );
                    log.append(invocation);
                }
                Ok(NextAction::Finish(text)) => {
                    tracing::info!(
                        run_id = %run_id,
                        iterations,
                        tool_calls = log.len(),
                        "run finished with an answer"
                    );
                    return RunOutcome {
                        run_id,
                        terminal: Terminal::FinalAnswer(text),
                        iterations,
                        log,
                    };
                }
                Err(e) => {
                    tracing::error!(run_id = %run_id, error = %e, "reasoning engine failed");
                    return RunOutcome {
                        run_id,
                        terminal: Terminal::Failed {
                            reason: e.to_string(),
                        },
                        iterations,
                        log,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockEngine, MockEngineError};
    use crate::domain::agent::tools::{ParameterSpec, ParameterType, ToolError, ToolHandler, ToolSpec};
    use async_trait::async_trait;

    struct StaticHandler(serde_json::Value);

    #[async_trait]
    impl ToolHandler for StaticHandler {
        async fn call(
            &self,
            _arguments: serde_json::Map<String, serde_json::Value>,
        ) -> Result<serde_json::Value, ToolError> {
            Ok(self.0.clone())
        }
    }

    struct FailingHandler(&'static str);

    #[async_trait]
    impl ToolHandler for FailingHandler {
        async fn call(
            &self,
            _arguments: serde_json::Map<String, serde_json::Value>,
        ) -> Result<serde_json::Value, ToolError> {
            Err(ToolError::new(self.0))
        }
    }

    fn weather_spec() -> ToolSpec {
        ToolSpec::new(
            "weather_api",
            "Gets the weather.",
            vec![ParameterSpec::required("location", ParameterType::String)],
        )
    }

    fn registry_with(spec: ToolSpec, handler: Arc<dyn ToolHandler>) -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(spec, handler);
        registry
    }

    #[tokio::test]
    async fn finishes_immediately_when_engine_answers() {
        let engine = Arc::new(MockEngine::new().with_finish("Take the train."));
        let orchestrator = Orchestrator::new(engine, ToolRegistry::new(), "prompt", 10);

        let outcome = orchestrator.run("Berkeley to SF").await;

        assert_eq!(outcome.final_text(), Some("Take the train."));
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.log.is_empty());
    }

    #[tokio::test]
    async fn records_tool_call_then_finishes() {
        let engine = Arc::new(
            MockEngine::new()
                .with_tool_call("weather_api", serde_json::json!({"location": "Berkeley, CA"}))
                .with_finish("Cycle over."),
        );
        let registry = registry_with(
            weather_spec(),
            Arc::new(StaticHandler(serde_json::json!({"temp_c": 18.0}))),
        );
        let orchestrator = Orchestrator::new(engine, registry, "prompt", 10);

        let outcome = orchestrator.run("Berkeley to SF").await;

        assert_eq!(outcome.final_text(), Some("Cycle over."));
        assert_eq!(outcome.iterations, 2);
        assert_eq!(outcome.log.len(), 1);
        let entry = &outcome.log.entries()[0];
        assert_eq!(entry.tool_name(), "weather_api");
        assert!(!entry.is_error());
        assert_eq!(entry.output().to_json()["temp_c"], 18.0);
    }

    #[tokio::test]
    async fn tool_failure_is_recorded_and_run_continues() {
        let engine = Arc::new(
            MockEngine::new()
                .with_tool_call("weather_api", serde_json::json!({"location": "Berkeley, CA"}))
                .with_finish("Answer despite the failure."),
        );
        let registry = registry_with(
            weather_spec(),
            Arc::new(FailingHandler("Error processing Weather API: timeout")),
        );
        let orchestrator = Orchestrator::new(engine, registry, "prompt", 10);

        let outcome = orchestrator.run("Berkeley to SF").await;

        assert_eq!(outcome.final_text(), Some("Answer despite the failure."));
        assert_eq!(outcome.log.len(), 1);
        assert!(outcome.log.entries()[0].is_error());
    }

    #[tokio::test]
    async fn unknown_tool_is_recorded_as_error_entry() {
        let engine = Arc::new(
            MockEngine::new()
                .with_tool_call("no_such_tool", serde_json::json!({}))
                .with_finish("Moving on."),
        );
        let orchestrator = Orchestrator::new(engine, ToolRegistry::new(), "prompt", 10);

        let outcome = orchestrator.run("Berkeley to SF").await;

        assert_eq!(outcome.log.len(), 1);
        assert_eq!(
            outcome.log.entries()[0].output().error_message(),
            Some("Tool 'no_such_tool' not found")
        );
        assert_eq!(outcome.final_text(), Some("Moving on."));
    }

    #[tokio::test]
    async fn exhausts_when_engine_never_finishes() {
        let engine = Arc::new(
            MockEngine::new()
                .with_tool_call("weather_api", serde_json::json!({"location": "a"}))
                .with_tool_call("weather_api", serde_json::json!({"location": "b"}))
                .with_tool_call("weather_api", serde_json::json!({"location": "c"})),
        );
        let registry = registry_with(
            weather_spec(),
            Arc::new(StaticHandler(serde_json::json!({"ok": true}))),
        );
        let orchestrator = Orchestrator::new(engine.clone(), registry, "prompt", 3);

        let outcome = orchestrator.run("Berkeley to SF").await;

        assert!(outcome.is_exhausted());
        assert_eq!(outcome.iterations, 3);
        assert_eq!(outcome.log.len(), 3);
        assert_eq!(engine.call_count(), 3);
    }

    #[tokio::test]
    async fn zero_bound_exhausts_without_calling_engine() {
        let engine = Arc::new(MockEngine::new().with_finish("never seen"));
        let orchestrator = Orchestrator::new(engine.clone(), ToolRegistry::new(), "prompt", 0);

        let outcome = orchestrator.run("Berkeley to SF").await;

        assert!(outcome.is_exhausted());
        assert_eq!(outcome.iterations, 0);
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn engine_failure_ends_run_with_failed_terminal() {
        let engine = Arc::new(
            MockEngine::new()
                .with_tool_call("weather_api", serde_json::json!({"location": "Berkeley, CA"}))
                .with_error(MockEngineError::Unavailable {
                    message: "offline".to_string(),
                }),
        );
        let registry = registry_with(
            weather_spec(),
            Arc::new(StaticHandler(serde_json::json!({"ok": true}))),
        );
        let orchestrator = Orchestrator::new(engine, registry, "prompt", 10);

        let outcome = orchestrator.run("Berkeley to SF").await;

        assert!(outcome.is_failed());
        assert_eq!(outcome.log.len(), 1);
    }

    #[tokio::test]
    async fn history_grows_monotonically_across_steps() {
        let engine = Arc::new(
            MockEngine::new()
                .with_tool_call("weather_api", serde_json::json!({"location": "a"}))
                .with_tool_call("weather_api", serde_json::json!({"location": "b"}))
                .with_finish("done"),
        );
        let registry = registry_with(
            weather_spec(),
            Arc::new(StaticHandler(serde_json::json!({"ok": true}))),
        );
        let orchestrator = Orchestrator::new(engine.clone(), registry, "prompt", 10);

        orchestrator.run("Berkeley to SF").await;

        let calls = engine.get_calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].history.len(), 0);
        assert_eq!(calls[1].history.len(), 1);
        assert_eq!(calls[2].history.len(), 2);
        assert_eq!(calls[2].history[0].arguments()["location"], "a");
    }

    #[tokio::test]
    async fn engine_sees_registered_tool_specs() {
        let engine = Arc::new(MockEngine::new().with_finish("done"));
        let registry = registry_with(
            weather_spec(),
            Arc::new(StaticHandler(serde_json::json!({"ok": true}))),
        );
        let orchestrator = Orchestrator::new(engine.clone(), registry, "prompt", 10);

        orchestrator.run("Berkeley to SF").await;

        let calls = engine.get_calls();
        assert_eq!(calls[0].tools.len(), 1);
        assert_eq!(calls[0].tools[0].name(), "weather_api");
    }
}
