//! Application layer for health-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizParams;
pub use ports::{
    progress::{NoProgress, QuizProgressNotifier},
    questionnaire_repository::{QuestionnaireInfo, QuestionnaireRepository, RepositoryError},
};
pub use use_cases::run_quiz::{
    QuizCommand, QuizController, QuizError, QuizEvent, RunQuizInput, RunQuizUseCase,
};
pub use use_cases::score_answers::{ScoreAnswersInput, ScoreAnswersUseCase};
