//! Response formatting for finished runs.
//!
//! Turns a run outcome into the caller-facing recommendation output. The
//! formatter only ever verifies and relabels what the run produced; a
//! final answer missing required sections is passed through as-is with
//! `success` cleared, never padded with invented content.

use crate::domain::agent::{RunOutcome, Terminal};
use crate::domain::travel::recommendation::{RecommendationOutput, REQUIRED_SECTIONS};

/// Text returned when the run hit its iteration bound.
const EXHAUSTED_MESSAGE: &str =
    "Maximum reasoning steps were reached before a final recommendation was produced.";

/// Maps run outcomes to recommendation outputs.
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Formats a finished run.
    ///
    /// `success` is true only for a final answer containing every
    /// required section header. Exhausted and failed runs produce an
    /// explanatory text with `success` false; collected tool data is
    /// attached in every case.
    pub fn format(outcome: RunOutcome) -> RecommendationOutput {
        let raw_data = outcome.collected_data();

        match outcome.terminal {
            Terminal::FinalAnswer(text) => {
                let missing = Self::missing_sections(&text);
                if missing.is_empty() {
                    RecommendationOutput::complete(text, raw_data)
                } else {
                    tracing::warn!(
                        run_id = %outcome.run_id,
                        missing = ?missing,
                        "final answer missing required sections"
                    );
                    RecommendationOutput::incomplete(text, raw_data)
                }
            }
            Terminal::Exhausted => {
                RecommendationOutput::incomplete(EXHAUSTED_MESSAGE, raw_data)
            }
            Terminal::Failed { reason } => RecommendationOutput::incomplete(
                format!("No recommendation could be produced: {}", reason),
                raw_data,
            ),
        }
    }

    /// Lists the required section headers absent from a text.
    pub fn missing_sections(text: &str) -> Vec<&'static str> {
        REQUIRED_SECTIONS
            .into_iter()
            .filter(|section| !text.contains(section))
            .collect()
    }
}
