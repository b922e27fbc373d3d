//! Orchestration loop configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the tool-calling orchestration loop.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Maximum number of reasoning iterations before the run is abandoned.
    ///
    /// A bound of 0 is legal and exhausts the run before the first
    /// reasoning step, which is useful for wiring tests.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Optional wall-clock limit for a whole run, in seconds.
    pub run_timeout_secs: Option<u64>,
}

impl AgentConfig {
    /// Get the run timeout as Duration, if configured
    pub fn run_timeout(&self) -> Option<Duration> {
        self.run_timeout_secs.map(Duration::from_secs)
    }

    /// Validate agent configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.run_timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            run_timeout_secs: None,
        }
    }
}

fn default_max_iterations() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_config_defaults() {
        let config = AgentConfig::default();
        assert_eq!(config.max_iterations, 10);
        assert!(config.run_timeout().is_none());
    }

    #[test]
    fn test_run_timeout_duration() {
        let config = AgentConfig {
            run_timeout_secs: Some(90),
            ..Default::default()
        };
        assert_eq!(config.run_timeout(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn test_validation_zero_timeout_rejected() {
        let config = AgentConfig {
            run_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        let config = AgentConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
