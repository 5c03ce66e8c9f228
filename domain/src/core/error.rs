//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Answer count mismatch: expected {expected} answers, got {actual}")]
    AnswerCountMismatch { expected: usize, actual: usize },

    #[error("Questionnaire has no questions")]
    EmptyQuestionnaire,

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    #[error("Invalid tier thresholds: {0}")]
    InvalidThresholds(String),

    #[error("No recommendation defined for tier '{0}'")]
    MissingRecommendation(String),

    #[error("Duplicate recommendation for tier '{0}'")]
    DuplicateRecommendation(String),

    #[error("Unknown questionnaire: {0}")]
    UnknownQuestionnaire(String),
}

impl DomainError {
    /// Check if this error is a contract violation between the caller and
    /// the scoring engine (as opposed to bad declarative data)
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, DomainError::AnswerCountMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mismatch_display() {
        let error = DomainError::AnswerCountMismatch {
            expected: 20,
            actual: 19,
        };
        assert_eq!(
            error.to_string(),
            "Answer count mismatch: expected 20 answers, got 19"
        );
    }

    #[test]
    fn test_is_contract_violation() {
        assert!(
            DomainError::AnswerCountMismatch {
                expected: 1,
                actual: 2
            }
            .is_contract_violation()
        );
        assert!(!DomainError::EmptyQuestionnaire.is_contract_violation());
        assert!(!DomainError::InvalidThresholds("gap".to_string()).is_contract_violation());
    }
}
