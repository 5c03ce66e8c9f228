//! Run Quiz use case
//!
//! Drives a respondent through a questionnaire one command at a time and
//! scores the answers on completion.

use crate::config::QuizParams;
use crate::ports::progress::{NoProgress, QuizProgressNotifier};
use crate::ports::questionnaire_repository::{QuestionnaireRepository, RepositoryError};
use quiz_domain::{
    Answer, DomainError, Question, Questionnaire, QuizOutcome, QuizSession, SessionError,
    Transition,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running a quiz
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Question {} has no answer yet", .step + 1)]
    Unanswered { step: usize },

    #[error("Quiz is already completed")]
    AlreadyCompleted,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl QuizError {
    /// Caller supplied input the engine cannot accept (e.g. the wrong
    /// number of answers), as opposed to broken questionnaire data
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, QuizError::Domain(e) if e.is_contract_violation())
    }
}

/// A single respondent action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    Answer(Answer),
    Next,
    Previous,
    Reset,
}

/// What happened as the result of a command
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// Answer stored; still on this step
    Recorded { step: usize, answer: Answer },
    /// Now showing this step
    Moved { step: usize },
    /// Navigation had no effect
    Stayed { step: usize },
    /// All questions done; outcome computed
    Completed(Box<QuizOutcome>),
    /// Back to step 0 with answers cleared
    Reset,
}

/// Input for the RunQuiz use case
#[derive(Debug, Clone, Default)]
pub struct RunQuizInput {
    /// Questionnaire id; the repository default when `None`
    pub questionnaire_id: Option<String>,
    pub params: QuizParams,
}

impl RunQuizInput {
    pub fn new(questionnaire_id: impl Into<String>) -> Self {
        Self {
            questionnaire_id: Some(questionnaire_id.into()),
            params: QuizParams::default(),
        }
    }

    pub fn with_params(mut self, params: QuizParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for starting an interactive quiz
pub struct RunQuizUseCase<R: QuestionnaireRepository + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionnaireRepository + 'static> RunQuizUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Start a quiz with default (no-op) progress
    pub fn start(&self, input: RunQuizInput) -> Result<QuizController, QuizError> {
        self.start_with_progress(input, Arc::new(NoProgress))
    }

    /// Start a quiz with progress callbacks
    pub fn start_with_progress(
        &self,
        input: RunQuizInput,
        progress: Arc<dyn QuizProgressNotifier>,
    ) -> Result<QuizController, QuizError> {
        let id = input
            .questionnaire_id
            .as_deref()
            .unwrap_or_else(|| self.repository.default_id());
        let questionnaire = self.repository.get(id)?;

        info!(
            "Starting quiz '{}' with {} questions",
            questionnaire.id(),
            questionnaire.len()
        );

        Ok(QuizController::new(questionnaire, input.params).with_progress(progress))
    }
}

/// Owns one quiz session and applies respondent commands to it
///
/// The "answer before advancing" guard lives here rather than in the domain
/// session, controlled by [`QuizParams::require_answer`].
pub struct QuizController {
    questionnaire: Questionnaire,
    session: QuizSession,
    params: QuizParams,
    progress: Arc<dyn QuizProgressNotifier>,
    outcome: Option<QuizOutcome>,
}

impl QuizController {
    pub fn new(questionnaire: Questionnaire, params: QuizParams) -> Self {
        let session = QuizSession::new(questionnaire.len());
        Self {
            questionnaire,
            session,
            params,
            progress: Arc::new(NoProgress),
            outcome: None,
        }
    }

    /// Attach a progress notifier and announce the quiz to it
    ///
    /// The first step is announced by [`QuizController::begin`], so a front
    /// end can print its own banner before any step output.
    pub fn with_progress(mut self, progress: Arc<dyn QuizProgressNotifier>) -> Self {
        progress.on_quiz_start(&self.questionnaire);
        self.progress = progress;
        self
    }

    /// Announce the current step to the progress notifier
    pub fn begin(&self) {
        if let Some(step) = self.session.step() {
            self.progress.on_step(step, self.questionnaire.len());
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Outcome of the last completion, cleared on reset
    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.session.is_completed()
    }

    /// Current step index and its question, or `None` once completed
    pub fn current_question(&self) -> Option<(usize, &Question)> {
        let step = self.session.step()?;
        self.questionnaire.question(step).map(|q| (step, q))
    }

    /// Apply one command
    pub fn handle(&mut self, command: QuizCommand) -> Result<QuizEvent, QuizError> {
        debug!("Quiz command: {:?}", command);
        match command {
            QuizCommand::Answer(answer) => self.answer(answer),
            QuizCommand::Next => self.next(),
            QuizCommand::Previous => Ok(self.previous()),
            QuizCommand::Reset => Ok(self.reset()),
        }
    }

    /// Record an answer for the current step (and advance if configured)
    pub fn answer(&mut self, answer: Answer) -> Result<QuizEvent, QuizError> {
        let step = self.session.step().ok_or(QuizError::AlreadyCompleted)?;
        self.session.answer(answer)?;
        self.progress.on_answer(step, answer);

        if self.params.auto_advance {
            self.next()
        } else {
            Ok(QuizEvent::Recorded { step, answer })
        }
    }

    /// Advance, enforcing the answer guard
    pub fn next(&mut self) -> Result<QuizEvent, QuizError> {
        let step = self.session.step().ok_or(QuizError::AlreadyCompleted)?;
        if self.params.require_answer && !self.session.can_advance() {
            return Err(QuizError::Unanswered { step });
        }

        match self.session.next() {
            Transition::Completed => self.complete(),
            Transition::Advanced(step) => {
                self.progress.on_step(step, self.questionnaire.len());
                Ok(QuizEvent::Moved { step })
            }
            Transition::Retreated(step) | Transition::Stayed(step) => {
                Ok(QuizEvent::Stayed { step })
            }
        }
    }

    /// Go back one step
    pub fn previous(&mut self) -> QuizEvent {
        match self.session.previous() {
            Transition::Retreated(step) => {
                self.progress.on_step(step, self.questionnaire.len());
                QuizEvent::Moved { step }
            }
            Transition::Advanced(step) | Transition::Stayed(step) => QuizEvent::Stayed { step },
            Transition::Completed => match &self.outcome {
                Some(outcome) => QuizEvent::Completed(Box::new(outcome.clone())),
                None => QuizEvent::Stayed { step: 0 },
            },
        }
    }

    /// Restart from the first question with all answers cleared
    pub fn reset(&mut self) -> QuizEvent {
        info!("Resetting quiz '{}'", self.questionnaire.id());
        self.session.reset();
        self.outcome = None;
        self.progress.on_reset();
        self.progress.on_step(0, self.questionnaire.len());
        QuizEvent::Reset
    }

    fn complete(&mut self) -> Result<QuizEvent, QuizError> {
        let outcome = self.questionnaire.evaluate(self.session.answers())?;
        info!(
            "Quiz '{}' completed: score {}/{} ({})",
            outcome.questionnaire_id, outcome.score, outcome.max_score, outcome.tier
        );
        self.progress.on_complete(&outcome);
        self.outcome = Some(outcome.clone());
        Ok(QuizEvent::Completed(Box::new(outcome)))
    }
}
