//! Questionnaires and their evaluated outcomes
//!
//! A [`Questionnaire`] binds an ordered question list to its threshold table
//! and recommendation table. [`Questionnaire::evaluate`] runs the scoring
//! engine and returns a [`QuizOutcome`].

pub mod entities;
pub mod outcome;

pub use entities::{DEFAULT_DISCLAIMER, Questionnaire};
pub use outcome::{QuestionResponse, QuizOutcome};
