//! Quiz parameters for interaction flow control.
//!
//! [`QuizParams`] groups the static parameters that control how
//! [`QuizController`](crate::use_cases::run_quiz::QuizController) moves through
//! a questionnaire. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Interaction flow parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizParams {
    /// Refuse to advance past a step until it has an answer.
    pub require_answer: bool,
    /// Move to the next step as soon as an answer is recorded.
    pub auto_advance: bool,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            require_answer: true,
            auto_advance: true,
        }
    }
}

impl QuizParams {
    // ==================== Builder Methods ====================

    pub fn with_require_answer(mut self, require: bool) -> Self {
        self.require_answer = require;
        self
    }

    pub fn with_auto_advance(mut self, auto: bool) -> Self {
        self.auto_advance = auto;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = QuizParams::default();
        assert!(params.require_answer);
        assert!(params.auto_advance);
    }

    #[test]
    fn test_builder_chain() {
        let params = QuizParams::default()
            .with_require_answer(false)
            .with_auto_advance(false);
        assert!(!params.require_answer);
        assert!(!params.auto_advance);
    }
}
