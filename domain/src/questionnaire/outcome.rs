//! Result of evaluating a completed answer set

use crate::core::answer::Answer;
use crate::core::question::Category;
use crate::recommendation::RecommendationBundle;
use crate::scoring::{RiskSummary, RiskTier};
use serde::{Deserialize, Serialize};

/// One question and the answer it received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: String,
    pub category: Category,
    pub answer: Option<Answer>,
    /// Points this answer contributed to the score
    pub points: u32,
}

/// Everything the presentation layer needs to render a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub questionnaire_id: String,
    pub title: String,
    pub score: u32,
    pub max_score: u32,
    pub tier: RiskTier,
    /// Score range covered by `tier` (e.g. "4-8", "9+")
    pub tier_range: String,
    pub recommendation: RecommendationBundle,
    pub summary: RiskSummary,
    pub responses: Vec<QuestionResponse>,
    pub disclaimer: String,
}

impl QuizOutcome {
    /// Number of questions left unanswered
    pub fn unanswered_count(&self) -> usize {
        self.responses.iter().filter(|r| r.answer.is_none()).count()
    }

    /// Score as a share of the maximum (0.0 to 1.0)
    pub fn score_ratio(&self) -> f64 {
        if self.max_score == 0 {
            0.0
        } else {
            self.score as f64 / self.max_score as f64
        }
    }
}
