//! Weighted score computation

use crate::core::answer_set::AnswerSet;
use crate::core::error::DomainError;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

fn check_len(answers: &AnswerSet, questions: &[Question]) -> Result<(), DomainError> {
    if answers.len() != questions.len() {
        return Err(DomainError::AnswerCountMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }
    Ok(())
}

/// Sum the points contributed by each answer
///
/// Unanswered questions contribute zero, so a partially filled set can be
/// scored at any time. A set whose length differs from the question list is a
/// caller bug and is rejected instead of being truncated or padded.
pub fn compute_score(answers: &AnswerSet, questions: &[Question]) -> Result<u32, DomainError> {
    check_len(answers, questions)?;
    Ok(questions
        .iter()
        .zip(answers.iter())
        .map(|(question, answer)| question.points(answer))
        .sum())
}

/// Highest possible score for a question list
pub fn max_score(questions: &[Question]) -> u32 {
    questions.iter().map(Question::weight).sum()
}

/// Unweighted count of risk answers vs. total questions, for the summary chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub risk_count: usize,
    pub total: usize,
}

impl RiskSummary {
    /// Questions whose answer was not a risk signal (including unanswered)
    pub fn no_risk_count(&self) -> usize {
        self.total - self.risk_count
    }

    /// Share of risk answers (0.0 to 1.0)
    pub fn risk_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.risk_count as f64 / self.total as f64
        }
    }
}

/// Count the questions whose answer is a risk signal
pub fn risk_summary(answers: &AnswerSet, questions: &[Question]) -> Result<RiskSummary, DomainError> {
    check_len(answers, questions)?;
    let risk_count = questions
        .iter()
        .zip(answers.iter())
        .filter(|(question, answer)| question.is_risk(*answer))
        .count();
    Ok(RiskSummary {
        risk_count,
        total: questions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answer::Answer;
    use crate::core::question::Category;

    fn sample() -> Vec<Question> {
        vec![
            Question::new("Chest pain?", Category::Symptom),
            Question::new("Diagnosed?", Category::History).with_weight(2),
            Question::protective("Exercise?", Category::Lifestyle),
        ]
    }

    #[test]
    fn test_score_all_risk() {
        let answers =
            AnswerSet::from_answers(vec![Some(Answer::Yes), Some(Answer::Unsure), Some(Answer::No)]);
        assert_eq!(compute_score(&answers, &sample()).unwrap(), 4);
        assert_eq!(max_score(&sample()), 4);
    }

    #[test]
    fn test_score_no_risk() {
        let answers =
            AnswerSet::from_answers(vec![Some(Answer::No), Some(Answer::No), Some(Answer::Yes)]);
        assert_eq!(compute_score(&answers, &sample()).unwrap(), 0);
    }

    #[test]
    fn test_unanswered_scores_zero() {
        let answers = AnswerSet::empty(3);
        assert_eq!(compute_score(&answers, &sample()).unwrap(), 0);

        let partial = AnswerSet::from_answers(vec![None, Some(Answer::Yes), None]);
        assert_eq!(compute_score(&partial, &sample()).unwrap(), 2);
    }

    #[test]
    fn test_length_mismatch_fails_fast() {
        let answers = AnswerSet::empty(2);
        let err = compute_score(&answers, &sample()).unwrap_err();
        assert_eq!(
            err,
            DomainError::AnswerCountMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert!(risk_summary(&AnswerSet::empty(4), &sample()).is_err());
    }

    #[test]
    fn test_answer_order_does_not_matter() {
        let questions = sample();

        let mut forward = AnswerSet::empty(3);
        forward.set(0, Answer::Yes);
        forward.set(1, Answer::No);
        forward.set(2, Answer::Unsure);

        let mut backward = AnswerSet::empty(3);
        backward.set(2, Answer::Yes);
        backward.set(2, Answer::Unsure);
        backward.set(1, Answer::No);
        backward.set(0, Answer::Yes);

        assert_eq!(forward, backward);
        assert_eq!(
            compute_score(&forward, &questions).unwrap(),
            compute_score(&backward, &questions).unwrap()
        );
    }

    #[test]
    fn test_risk_summary_is_unweighted() {
        let answers =
            AnswerSet::from_answers(vec![Some(Answer::No), Some(Answer::Yes), None]);
        let summary = risk_summary(&answers, &sample()).unwrap();
        assert_eq!(summary.risk_count, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.no_risk_count(), 2);
        assert!((summary.risk_ratio() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_risk_ratio_empty() {
        let summary = RiskSummary {
            risk_count: 0,
            total: 0,
        };
        assert_eq!(summary.risk_ratio(), 0.0);
    }
}
