//! Output formatter trait

use quiz_domain::{OutputFormat, QuizOutcome};

/// Trait for formatting quiz outcomes
pub trait OutputFormatter {
    /// Format the complete outcome
    fn format(&self, outcome: &QuizOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &QuizOutcome) -> String;

    /// Format score, tier and advice only (concise output)
    fn format_summary(&self, outcome: &QuizOutcome) -> String;

    /// Format in the requested style
    fn render(&self, outcome: &QuizOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(outcome),
            OutputFormat::Summary => self.format_summary(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}
