//! Score Answers use case
//!
//! Scores a complete list of answers in one call, without an interactive
//! session.

use super::run_quiz::QuizError;
use crate::ports::questionnaire_repository::{QuestionnaireInfo, QuestionnaireRepository};
use quiz_domain::{Answer, AnswerSet, DomainError, QuizOutcome};
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the ScoreAnswers use case
#[derive(Debug, Clone, Default)]
pub struct ScoreAnswersInput {
    /// Questionnaire id; the repository default when `None`
    pub questionnaire_id: Option<String>,
    /// One entry per question, `None` for unanswered
    pub answers: Vec<Option<Answer>>,
}

impl ScoreAnswersInput {
    pub fn new(answers: Vec<Option<Answer>>) -> Self {
        Self {
            questionnaire_id: None,
            answers,
        }
    }

    /// Parse a comma-separated answer list such as `yes,no,unsure,-`
    ///
    /// `-` or an empty entry means unanswered.
    pub fn parse(list: &str) -> Result<Self, DomainError> {
        let answers = list
            .split(',')
            .map(Answer::parse_optional)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(answers))
    }

    pub fn with_questionnaire(mut self, id: impl Into<String>) -> Self {
        self.questionnaire_id = Some(id.into());
        self
    }
}

/// Use case for scoring a prepared answer list
pub struct ScoreAnswersUseCase<R: QuestionnaireRepository + 'static> {
    repository: Arc<R>,
}

impl<R: QuestionnaireRepository + 'static> ScoreAnswersUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, input: ScoreAnswersInput) -> Result<QuizOutcome, QuizError> {
        let id = input
            .questionnaire_id
            .as_deref()
            .unwrap_or_else(|| self.repository.default_id());
        let questionnaire = self.repository.get(id)?;

        debug!(
            "Scoring {} answers against '{}'",
            input.answers.len(),
            questionnaire.id()
        );

        let answers = AnswerSet::from_answers(input.answers);
        let outcome = questionnaire.evaluate(&answers)?;

        info!(
            "Scored '{}': {}/{} ({})",
            outcome.questionnaire_id, outcome.score, outcome.max_score, outcome.tier
        );
        Ok(outcome)
    }

    /// Available questionnaires, for `--list`
    pub fn available(&self) -> Vec<QuestionnaireInfo> {
        self.repository.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::CatalogRepository;
    use quiz_domain::RiskTier;

    fn use_case() -> ScoreAnswersUseCase<CatalogRepository> {
        ScoreAnswersUseCase::new(Arc::new(CatalogRepository))
    }

    #[test]
    fn test_parse_list() {
        let input = ScoreAnswersInput::parse("yes, n,?,-,").unwrap();
        assert_eq!(
            input.answers,
            vec![
                Some(Answer::Yes),
                Some(Answer::No),
                Some(Answer::Unsure),
                None,
                None
            ]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ScoreAnswersInput::parse("yes,maybe").is_err());
    }

    #[test]
    fn test_score_default_questionnaire() {
        let list = ["yes"; 16].into_iter().chain(["no"; 4]).collect::<Vec<_>>().join(",");
        let outcome = use_case()
            .execute(ScoreAnswersInput::parse(&list).unwrap())
            .unwrap();
        assert_eq!(outcome.questionnaire_id, "cardio");
        assert_eq!(outcome.score, 18);
        assert_eq!(outcome.tier, RiskTier::High);
    }

    #[test]
    fn test_partial_answers_score() {
        let mut answers = vec![None; 11];
        answers[5] = Some(Answer::Yes);
        let outcome = use_case()
            .execute(ScoreAnswersInput::new(answers).with_questionnaire("digestion"))
            .unwrap();
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.tier, RiskTier::Low);
        assert_eq!(outcome.unanswered_count(), 10);
    }

    #[test]
    fn test_wrong_length_is_rejected() {
        let err = use_case()
            .execute(ScoreAnswersInput::new(vec![Some(Answer::Yes); 3]))
            .unwrap_err();
        assert!(matches!(
            err,
            QuizError::Domain(DomainError::AnswerCountMismatch {
                expected: 20,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_wrong_length_is_a_caller_error() {
        let err = use_case()
            .execute(ScoreAnswersInput::new(vec![None; 12]).with_questionnaire("digestion"))
            .unwrap_err();
        assert!(err.is_contract_violation());

        let err = use_case()
            .execute(ScoreAnswersInput::new(vec![]).with_questionnaire("sleep"))
            .unwrap_err();
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn test_available() {
        let ids: Vec<_> = use_case().available().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["cardio", "digestion"]);
    }
}
