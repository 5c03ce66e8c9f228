//! Progress notification port
//!
//! Defines the interface for reporting progress while a quiz is answered.

use quiz_domain::{Answer, Questionnaire, QuizOutcome};

/// Callback for progress updates during a quiz
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, etc.)
pub trait QuizProgressNotifier: Send + Sync {
    /// Called once when a quiz starts
    fn on_quiz_start(&self, questionnaire: &Questionnaire);

    /// Called whenever the current step changes
    fn on_step(&self, step: usize, total: usize);

    /// Called when an answer is recorded for a step
    fn on_answer(&self, _step: usize, _answer: Answer) {}

    /// Called when the quiz is completed and scored
    fn on_complete(&self, outcome: &QuizOutcome);

    /// Called when the quiz is reset to the first step
    fn on_reset(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl QuizProgressNotifier for NoProgress {
    fn on_quiz_start(&self, _questionnaire: &Questionnaire) {}
    fn on_step(&self, _step: usize, _total: usize) {}
    fn on_complete(&self, _outcome: &QuizOutcome) {}
}
