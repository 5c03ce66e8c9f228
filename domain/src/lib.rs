//! Domain layer for health-quiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Scoring Engine
//!
//! A pure mapping from an ordered [`AnswerSet`] to a risk score, a
//! [`RiskTier`] and the tier's [`RecommendationBundle`]:
//!
//! - **compute_score**: sums per-question points (weight × polarity rule)
//! - **classify**: maps a score onto a tier through a [`TierThresholds`] table
//! - **get_recommendation**: looks the tier up in a [`RecommendationTable`]
//!
//! ## Questionnaire
//!
//! A [`Questionnaire`] binds questions to their own thresholds and advice.
//! Built-in sets live in [`catalog`].
//!
//! ## Session
//!
//! A [`QuizSession`] tracks the current step and answers while the
//! respondent moves through the quiz.

pub mod catalog;
pub mod config;
pub mod core;
pub mod questionnaire;
pub mod recommendation;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    answer::Answer,
    answer_set::AnswerSet,
    error::DomainError,
    question::{Category, MAX_WEIGHT, Polarity, Question},
};
pub use questionnaire::{DEFAULT_DISCLAIMER, QuestionResponse, Questionnaire, QuizOutcome};
pub use recommendation::{
    MealPlan, RecommendationBundle, RecommendationTable, TierColor, get_recommendation,
};
pub use scoring::{
    RiskSummary, RiskTier, TierThreshold, TierThresholds, classify, compute_score, max_score,
    risk_summary,
};
pub use session::{QuizSession, SessionError, SessionState, Transition};
