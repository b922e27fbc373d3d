//! Terminal states and the outcome of one orchestration run.

use crate::domain::agent::tools::ToolCallLog;
use crate::domain::foundation::RunId;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Terminal {
    /// The engine produced a final answer
    FinalAnswer(String),

    /// The iteration bound was reached before a final answer
    Exhausted,

    /// The reasoning engine itself failed
    Failed { reason: String },
}

/// Result of one orchestration run.
///
/// Always produced, whatever happened during the run; the log carries the
/// full tool call history either way.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Identifier of the run
    pub run_id: RunId,

    /// How the run ended
    pub terminal: Terminal,

    /// Number of reasoning steps taken
    pub iterations: u32,

    /// Chronological record of every tool call
    pub log: ToolCallLog,
}

impl RunOutcome {
    /// Returns the final answer text, if the run produced one.
    pub fn final_text(&self) -> Option<&str> {
        match &self.terminal {
            Terminal::FinalAnswer(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true if the run hit its iteration bound.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.terminal, Terminal::Exhausted)
    }

    /// Returns true if the reasoning engine failed.
    pub fn is_failed(&self) -> bool {
        matches!(self.terminal, Terminal::Failed { .. })
    }

    /// Collects each tool's most recent output for downstream reporting.
    pub fn collected_data(&self) -> serde_json::Map<String, serde_json::Value> {
        self.log.latest_outputs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_answer_exposes_text() {
        let outcome = RunOutcome {
            run_id: RunId::new(),
            terminal: Terminal::FinalAnswer("Take BART.".to_string()),
            iterations: 3,
            log: ToolCallLog::new(),
        };

        assert_eq!(outcome.final_text(), Some("Take BART."));
        assert!(!outcome.is_exhausted());
        assert!(!outcome.is_failed());
    }

    #[test]
    fn exhausted_has_no_text() {
        let outcome = RunOutcome {
            run_id: RunId::new(),
            terminal: Terminal::Exhausted,
            iterations: 10,
            log: ToolCallLog::new(),
        };

        assert!(outcome.final_text().is_none());
        assert!(outcome.is_exhausted());
    }

    #[test]
    fn failed_reports_reason() {
        let outcome = RunOutcome {
            run_id: RunId::new(),
            terminal: Terminal::Failed {
                reason: "engine unavailable".to_string(),
            },
            iterations: 1,
            log: ToolCallLog::new(),
        };

        assert!(outcome.is_failed());
        assert!(outcome.final_text().is_none());
    }
}
