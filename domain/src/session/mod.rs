//! Quiz session domain
//!
//! A session owns the [`AnswerSet`](crate::AnswerSet) for one run through a
//! questionnaire and tracks the current step.

pub mod entities;

pub use entities::{QuizSession, SessionError, SessionState, Transition};
