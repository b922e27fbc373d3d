//! Reasoning engine configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the hosted reasoning engine (OpenAI).
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Model used for the reasoning steps
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL (overridable for testing)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EngineConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an OpenAI key is configured
    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }

        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }

        if !self.base_url.starts_with("http") {
            return Err(ValidationError::InvalidBaseUrl("engine"));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    120
}
