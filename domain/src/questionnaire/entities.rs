//! Questionnaire aggregate

use super::outcome::{QuestionResponse, QuizOutcome};
use crate::core::answer_set::AnswerSet;
use crate::core::error::DomainError;
use crate::core::question::Question;
use crate::recommendation::{RecommendationTable, get_recommendation};
use crate::scoring::{TierThresholds, compute_score, max_score, risk_summary};
use serde::Serialize;

/// Disclaimer shown with every result unless a questionnaire overrides it
pub const DEFAULT_DISCLAIMER: &str = "This quiz is for educational purposes only and does not provide medical advice, diagnosis, or treatment.";

/// A question set bound to its own scoring scale and advice content
///
/// Thresholds and weights are owned per questionnaire; two questionnaires
/// never share a scale.
#[derive(Debug, Clone, Serialize)]
pub struct Questionnaire {
    id: String,
    title: String,
    description: String,
    disclaimer: String,
    questions: Vec<Question>,
    thresholds: TierThresholds,
    recommendations: RecommendationTable,
}

impl Questionnaire {
    /// Assemble a questionnaire, validating that it has questions and that
    /// every reachable tier has recommendation content
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        questions: Vec<Question>,
        thresholds: TierThresholds,
        recommendations: RecommendationTable,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "questionnaire id cannot be empty".to_string(),
            ));
        }
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionnaire);
        }
        // Scoring sums weights in u32; the total must fit.
        if questions
            .iter()
            .try_fold(0u32, |total, q| total.checked_add(q.weight()))
            .is_none()
        {
            return Err(DomainError::InvalidQuestion(format!(
                "total question weight of '{}' exceeds {}",
                id,
                u32::MAX
            )));
        }
        recommendations.ensure_covers(&thresholds)?;

        Ok(Self {
            id,
            title: title.into(),
            description: String::new(),
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
            questions,
            thresholds,
            recommendations,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_disclaimer(mut self, disclaimer: impl Into<String>) -> Self {
        self.disclaimer = disclaimer.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn disclaimer(&self) -> &str {
        &self.disclaimer
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed questionnaire
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    pub fn recommendations(&self) -> &RecommendationTable {
        &self.recommendations
    }

    /// Sum of all question weights
    pub fn max_score(&self) -> u32 {
        max_score(&self.questions)
    }

    /// Fresh all-unanswered set sized for this questionnaire
    pub fn empty_answers(&self) -> AnswerSet {
        AnswerSet::empty(self.questions.len())
    }

    /// Score an answer set against this questionnaire
    pub fn score(&self, answers: &AnswerSet) -> Result<u32, DomainError> {
        compute_score(answers, &self.questions)
    }

    /// Run the full engine: score, classify, look up advice, summarise
    pub fn evaluate(&self, answers: &AnswerSet) -> Result<QuizOutcome, DomainError> {
        let score = self.score(answers)?;
        let tier = self.thresholds.classify(score);
        let tier_range = self
            .thresholds
            .bands()
            .iter()
            .position(|band| band.tier == tier)
            .and_then(|index| self.thresholds.range_label(index))
            .unwrap_or_default();
        let recommendation = get_recommendation(tier, &self.recommendations)?.clone();
        let summary = risk_summary(answers, &self.questions)?;

        let responses = self
            .questions
            .iter()
            .zip(answers.iter())
            .map(|(question, answer)| QuestionResponse {
                question: question.text().to_string(),
                category: question.category(),
                answer,
                points: question.points(answer),
            })
            .collect();

        Ok(QuizOutcome {
            questionnaire_id: self.id.clone(),
            title: self.title.clone(),
            score,
            max_score: self.max_score(),
            tier,
            tier_range,
            recommendation,
            summary,
            responses,
            disclaimer: self.disclaimer.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answer::Answer;
    use crate::core::question::{Category, MAX_WEIGHT};
    use crate::recommendation::{MealPlan, RecommendationBundle};
    use crate::scoring::RiskTier;

    fn table() -> RecommendationTable {
        RecommendationTable::new(
            RiskTier::ALL
                .into_iter()
                .map(|tier| {
                    RecommendationBundle::new(
                        tier,
                        tier.as_str(),
                        "advice",
                        MealPlan::new("b", "l", "s", "d"),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    fn small() -> Questionnaire {
        Questionnaire::new(
            "small",
            "Small quiz",
            vec![
                Question::new("Symptom?", Category::Symptom),
                Question::new("Diagnosis?", Category::History).with_weight(2),
                Question::protective("Exercise?", Category::Lifestyle),
            ],
            TierThresholds::three_band(0, 2).unwrap(),
            table(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_questions() {
        let err = Questionnaire::new(
            "empty",
            "Empty",
            vec![],
            TierThresholds::three_band(1, 2).unwrap(),
            table(),
        )
        .unwrap_err();
        assert_eq!(err, DomainError::EmptyQuestionnaire);
    }

    #[test]
    fn test_rejects_missing_recommendation() {
        let partial = RecommendationTable::new(vec![RecommendationBundle::new(
            RiskTier::Low,
            "low",
            "advice",
            MealPlan::new("b", "l", "s", "d"),
        )])
        .unwrap();
        let err = Questionnaire::new(
            "q",
            "Q",
            vec![Question::new("Symptom?", Category::Symptom)],
            TierThresholds::three_band(1, 2).unwrap(),
            partial,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::MissingRecommendation(_)));
    }

    #[test]
    fn test_rejects_overflowing_total_weight() {
        // Deserialized questions skip the per-question weight cap
        let heavy: Question = serde_json::from_str(
            r#"{"text": "Heavy?", "category": "symptom", "weight": 4294967295, "polarity": "risk_positive"}"#,
        )
        .unwrap();
        let err = Questionnaire::new(
            "heavy",
            "Heavy",
            vec![heavy.clone(), heavy],
            TierThresholds::three_band(1, 2).unwrap(),
            table(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_accepts_maximum_weights() {
        let quiz = Questionnaire::new(
            "max",
            "Max",
            vec![Question::new("Heavy?", Category::Symptom).with_weight(MAX_WEIGHT); 3],
            TierThresholds::three_band(1, 2).unwrap(),
            table(),
        )
        .unwrap();
        assert_eq!(quiz.max_score(), 3 * MAX_WEIGHT);
    }

    #[test]
    fn test_evaluate() {
        let quiz = small();
        let answers = AnswerSet::from_answers(vec![
            Some(Answer::Yes),
            Some(Answer::No),
            Some(Answer::Unsure),
        ]);

        let outcome = quiz.evaluate(&answers).unwrap();
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.max_score, 4);
        assert_eq!(outcome.tier, RiskTier::Moderate);
        assert_eq!(outcome.tier_range, "1-2");
        assert_eq!(outcome.recommendation.tier, RiskTier::Moderate);
        assert_eq!(outcome.summary.risk_count, 2);
        assert_eq!(outcome.responses.len(), 3);
        assert_eq!(outcome.responses[2].points, 1);
        assert_eq!(outcome.disclaimer, DEFAULT_DISCLAIMER);
    }

    #[test]
    fn test_evaluate_reports_tier_range() {
        let quiz = small();
        let none = AnswerSet::from_answers(vec![Some(Answer::No), Some(Answer::No), Some(Answer::Yes)]);
        assert_eq!(quiz.evaluate(&none).unwrap().tier_range, "0");

        let all = AnswerSet::from_answers(vec![Some(Answer::Yes), Some(Answer::Yes), Some(Answer::No)]);
        let outcome = quiz.evaluate(&all).unwrap();
        assert_eq!(outcome.tier, RiskTier::High);
        assert_eq!(outcome.tier_range, "3+");
    }

    #[test]
    fn test_evaluate_rejects_wrong_length() {
        let quiz = small();
        assert!(quiz.evaluate(&AnswerSet::empty(2)).is_err());
    }
}
