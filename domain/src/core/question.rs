//! Question value object

use super::answer::Answer;
use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Topic group a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Symptom,
    History,
    Family,
    Lifestyle,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Symptom => "symptom",
            Category::History => "history",
            Category::Family => "family",
            Category::Lifestyle => "lifestyle",
        }
    }

    /// Heading used when rendering a question
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Symptom => "Symptoms",
            Category::History => "Medical history",
            Category::Family => "Family history",
            Category::Lifestyle => "Lifestyle",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which answers count as a risk signal for a question
///
/// - `RiskPositive`: symptoms, history, family history, overweight, stress.
///   `Yes` or `Unsure` is the risk signal.
/// - `Protective`: healthy habits such as regular exercise. `No` or `Unsure`
///   is the risk signal (the habit is absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    RiskPositive,
    Protective,
}

impl Polarity {
    /// Whether the given answer is a risk signal under this polarity
    pub fn is_risk(&self, answer: Answer) -> bool {
        match self {
            Polarity::RiskPositive => matches!(answer, Answer::Yes | Answer::Unsure),
            Polarity::Protective => matches!(answer, Answer::No | Answer::Unsure),
        }
    }
}

/// A single question with its scoring rule (Value Object)
///
/// Text, weight and polarity live in one record, so the scoring rule can never
/// drift away from the question it belongs to.
///
/// # Example
///
/// ```
/// use quiz_domain::{Answer, Category, Question};
///
/// let q = Question::protective("Do you exercise regularly?", Category::Lifestyle);
/// assert_eq!(q.points(Some(Answer::No)), 1);
/// assert_eq!(q.points(Some(Answer::Yes)), 0);
/// assert_eq!(q.points(None), 0);
/// ```
/// Largest weight a single question may carry
pub const MAX_WEIGHT: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    category: Category,
    weight: u32,
    polarity: Polarity,
}

impl Question {
    /// Create a risk-positive question with weight 1
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Question cannot be empty");
        Self {
            text,
            category,
            weight: 1,
            polarity: Polarity::RiskPositive,
        }
    }

    /// Create a protective question with weight 1
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn protective(text: impl Into<String>, category: Category) -> Self {
        Self::new(text, category).with_polarity(Polarity::Protective)
    }

    /// Try to create a question from raw parts, validating text and weight
    pub fn try_new(
        text: impl Into<String>,
        category: Category,
        weight: u32,
        polarity: Polarity,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(
                "question text cannot be empty".to_string(),
            ));
        }
        if !(1..=MAX_WEIGHT).contains(&weight) {
            return Err(DomainError::InvalidQuestion(format!(
                "weight must be between 1 and {}, got {}: {}",
                MAX_WEIGHT, weight, text
            )));
        }
        Ok(Self {
            text,
            category,
            weight,
            polarity,
        })
    }

    /// Set the weight of this question
    ///
    /// # Panics
    /// Panics if the weight is zero or above [`MAX_WEIGHT`]
    pub fn with_weight(mut self, weight: u32) -> Self {
        assert!(
            (1..=MAX_WEIGHT).contains(&weight),
            "Question weight must be between 1 and {}",
            MAX_WEIGHT
        );
        self.weight = weight;
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Whether the answer is a risk signal for this question
    pub fn is_risk(&self, answer: Option<Answer>) -> bool {
        answer.is_some_and(|a| self.polarity.is_risk(a))
    }

    /// Points contributed by the answer (unanswered contributes zero)
    pub fn points(&self, answer: Option<Answer>) -> u32 {
        if self.is_risk(answer) { self.weight } else { 0 }
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_positive_points() {
        let q = Question::new("Do you smoke?", Category::Lifestyle);
        assert_eq!(q.points(Some(Answer::Yes)), 1);
        assert_eq!(q.points(Some(Answer::Unsure)), 1);
        assert_eq!(q.points(Some(Answer::No)), 0);
        assert_eq!(q.points(None), 0);
    }

    #[test]
    fn test_protective_points() {
        let q = Question::protective("Do you eat a healthy diet?", Category::Lifestyle);
        assert_eq!(q.points(Some(Answer::No)), 1);
        assert_eq!(q.points(Some(Answer::Unsure)), 1);
        assert_eq!(q.points(Some(Answer::Yes)), 0);
    }

    #[test]
    fn test_weighted_points() {
        let q = Question::new("Diagnosed condition?", Category::History).with_weight(2);
        assert_eq!(q.points(Some(Answer::Yes)), 2);
        assert_eq!(q.points(Some(Answer::No)), 0);
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("", Category::Symptom);
    }

    #[test]
    fn test_try_new_rejects_zero_weight() {
        let err = Question::try_new("Text", Category::Symptom, 0, Polarity::RiskPositive)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_try_new_rejects_oversized_weight() {
        assert!(
            Question::try_new("Text", Category::Symptom, MAX_WEIGHT, Polarity::RiskPositive)
                .is_ok()
        );
        let err = Question::try_new("Text", Category::Symptom, u32::MAX, Polarity::RiskPositive)
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    #[should_panic]
    fn test_with_oversized_weight_panics() {
        let _ = Question::new("Text", Category::Symptom).with_weight(MAX_WEIGHT + 1);
    }

    #[test]
    fn test_try_new_rejects_blank_text() {
        assert!(Question::try_new("  ", Category::Symptom, 1, Polarity::RiskPositive).is_err());
    }

    #[test]
    fn test_polarity_deserialize() {
        let p: Polarity = serde_json::from_str("\"protective\"").unwrap();
        assert_eq!(p, Polarity::Protective);
        let p: Polarity = serde_json::from_str("\"risk_positive\"").unwrap();
        assert_eq!(p, Polarity::RiskPositive);
    }
}
