//! Quiz session state machine

use crate::core::answer::Answer;
use crate::core::answer_set::AnswerSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by invalid session transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Quiz is already completed; reset to answer again")]
    AlreadyCompleted,
}

/// Where the respondent is in the quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    InProgress { step: usize },
    Completed,
}

/// Result of a navigation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to this step
    Advanced(usize),
    /// Moved back to this step
    Retreated(usize),
    /// Navigation had no effect; still on this step
    Stayed(usize),
    /// Moved past the last question
    Completed,
}

/// In-memory state of one run through a questionnaire
///
/// ```text
/// InProgress(0) ──next──> InProgress(1) ──next──> ... ──next──> Completed
///       ^                     │                                   │
///       └──────previous───────┘                                   │
///       └──────────────────────────reset──────────────────────────┘
/// ```
///
/// The session does not enforce "answer before advancing"; that guard belongs
/// to the caller driving the quiz (see [`QuizSession::can_advance`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    state: SessionState,
    answers: AnswerSet,
}

impl QuizSession {
    /// Start a session at step 0 for `question_count` questions
    pub fn new(question_count: usize) -> Self {
        Self {
            state: SessionState::InProgress { step: 0 },
            answers: AnswerSet::empty(question_count),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    /// Current step, or `None` once completed
    pub fn step(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress { step } => Some(step),
            SessionState::Completed => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, SessionState::Completed)
    }

    /// Answer recorded for the current step
    pub fn current_answer(&self) -> Option<Answer> {
        self.step().and_then(|step| self.answers.get(step))
    }

    /// Whether the current step has an answer
    pub fn can_advance(&self) -> bool {
        self.current_answer().is_some()
    }

    pub fn is_last_step(&self) -> bool {
        self.step()
            .is_some_and(|step| step + 1 >= self.answers.len())
    }

    /// Record an answer for the current step
    pub fn answer(&mut self, answer: Answer) -> Result<(), SessionError> {
        match self.state {
            SessionState::InProgress { step } => {
                self.answers.set(step, answer);
                Ok(())
            }
            SessionState::Completed => Err(SessionError::AlreadyCompleted),
        }
    }

    /// Advance one step, completing the session after the last question
    pub fn next(&mut self) -> Transition {
        match self.state {
            SessionState::InProgress { step } if step + 1 < self.answers.len() => {
                self.state = SessionState::InProgress { step: step + 1 };
                Transition::Advanced(step + 1)
            }
            _ => {
                self.state = SessionState::Completed;
                Transition::Completed
            }
        }
    }

    /// Go back one step; a no-op on the first step or once completed
    pub fn previous(&mut self) -> Transition {
        match self.state {
            SessionState::InProgress { step } if step > 0 => {
                self.state = SessionState::InProgress { step: step - 1 };
                Transition::Retreated(step - 1)
            }
            SessionState::InProgress { step } => Transition::Stayed(step),
            SessionState::Completed => Transition::Completed,
        }
    }

    /// Return to step 0 with every answer cleared
    pub fn reset(&mut self) {
        self.state = SessionState::InProgress { step: 0 };
        self.answers.clear();
    }
}
