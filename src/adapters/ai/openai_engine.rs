//! OpenAI Engine - Implementation of ReasoningEngine for OpenAI's API.
//!
//! Drives the agent with OpenAI chat completions using function calling.
//! Each `decide` call rebuilds the full conversation from the run context
//! and asks the model for the next step, so the adapter holds no state
//! between calls.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIEngineConfig::new(api_key)
//!     .with_model("gpt-4o-mini")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let engine = OpenAIEngine::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::agent::tools::ToolCall;
use crate::ports::{EngineError, NextAction, ReasoningEngine, ReasoningRequest};

/// Configuration for the OpenAI engine.
#[derive(Debug, Clone)]
pub struct OpenAIEngineConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o-mini", "gpt-4o").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIEngineConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API engine implementation.
pub struct OpenAIEngine {
    config: OpenAIEngineConfig,
    client: Client,
}

impl OpenAIEngine {
    /// Creates a new OpenAI engine with the given configuration.
    pub fn new(config: OpenAIEngineConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts a reasoning request to OpenAI's chat format.
    ///
    /// The run's tool call history is replayed as assistant tool_call
    /// messages paired with tool result messages, so the model sees each
    /// earlier call and what it returned.
    fn to_chat_request(&self, request: &ReasoningRequest) -> ChatRequest {
        let mut messages = vec![
            ChatMessage::system(&request.system_prompt),
            ChatMessage::user(&request.task),
        ];

        for invocation in &request.history {
            let call_id = invocation.id().to_string();
            messages.push(ChatMessage::assistant_tool_call(
                &call_id,
                invocation.tool_name(),
                &serde_json::Value::Object(invocation.arguments().clone()).to_string(),
            ));
            messages.push(ChatMessage::tool_result(
                &call_id,
                &invocation.output().to_json().to_string(),
            ));
        }

        let tools = if request.tools.is_empty() {
            None
        } else {
            Some(
                request
                    .tools
                    .iter()
                    .map(|spec| spec.to_openai_format())
                    .collect(),
            )
        };

        ChatRequest {
            model: self.config.model.clone(),
            messages,
            temperature: 0.0,
            tools,
        }
    }

    /// Sends a request and handles transport errors.
    async fn send_request(&self, request: &ReasoningRequest) -> Result<Response, EngineError> {
        let chat_request = self.to_chat_request(request);

        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&chat_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EngineError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    EngineError::network(format!("Connection failed: {}", e))
                } else {
                    EngineError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, EngineError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(EngineError::AuthenticationFailed),
            429 => {
                let retry_after = Self::parse_retry_after(&error_body);
                Err(EngineError::rate_limited(retry_after))
            }
            400 => Err(EngineError::InvalidRequest(error_body)),
            500..=599 => Err(EngineError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(EngineError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u64 {
        // OpenAI includes retry-after in the error message sometimes
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    // Try to find "try again in Xs" pattern
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u64>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        30 // Default retry after
    }

    /// Parses the model's message into the next action.
    ///
    /// A message carrying tool calls wins over content; the loop runs one
    /// call per step, so only the first of any parallel calls is taken
    /// and the model re-requests the rest on later steps.
    fn parse_decision(message: ChatResponseMessage) -> Result<NextAction, EngineError> {
        if let Some(calls) = message.tool_calls {
            if let Some(call) = calls.into_iter().next() {
                let arguments: serde_json::Value = serde_json::from_str(&call.function.arguments)
                    .map_err(|e| {
                        EngineError::parse(format!(
                            "Malformed arguments for tool {}: {}",
                            call.function.name, e
                        ))
                    })?;
                let arguments = match arguments {
                    serde_json::Value::Object(map) => map,
                    other => {
                        return Err(EngineError::parse(format!(
                            "Tool arguments must be an object, got: {}",
                            other
                        )))
                    }
                };
                return Ok(NextAction::CallTool(ToolCall::new(
                    call.function.name,
                    arguments,
                )));
            }
        }

        match message.content {
            Some(content) if !content.is_empty() => Ok(NextAction::Finish(content)),
            _ => Err(EngineError::parse(
                "Response carried neither content nor tool calls",
            )),
        }
    }

    /// Parses a chat completions response into the next action.
    async fn parse_response(&self, response: Response) -> Result<NextAction, EngineError> {
        let response = self.handle_response_status(response).await?;

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| EngineError::parse(format!("Failed to parse response: {}", e)))?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| EngineError::parse("No choices in response"))?;

        Self::parse_decision(choice.message)
    }
}

#[async_trait]
impl ReasoningEngine for OpenAIEngine {
    async fn decide(&self, request: ReasoningRequest) -> Result<NextAction, EngineError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<ChatToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl ChatMessage {
    fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: Some(content.to_string()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.to_string()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    fn assistant_tool_call(call_id: &str, name: &str, arguments: &str) -> Self {
        Self {
            role: "assistant".to_string(),
            content: None,
            tool_calls: Some(vec![ChatToolCall {
                id: call_id.to_string(),
                call_type: "function".to_string(),
                function: ChatFunctionCall {
                    name: name.to_string(),
                    arguments: arguments.to_string(),
                },
            }]),
            tool_call_id: None,
        }
    }

    fn tool_result(call_id: &str, content: &str) -> Self {
        Self {
            role: "tool".to_string(),
            content: Some(content.to_string()),
            tool_calls: None,
            tool_call_id: Some(call_id.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatToolCall {
    id: String,
    #[serde(rename = "type")]
    call_type: String,
    function: ChatFunctionCall,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatFunctionCall {
    name: String,
    /// JSON-encoded argument object, as OpenAI sends it.
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ChatToolCall>>,
}
