//! Raw TOML questionnaire definitions
//!
//! ```toml
//! id = "sleep"
//! title = "Sleep Quality Check"
//! description = "A few questions about rest and recovery."
//!
//! [[questions]]
//! text = "Do you wake up tired most mornings?"
//! category = "symptom"
//!
//! [[questions]]
//! text = "Do you keep a regular bedtime?"
//! category = "lifestyle"
//! polarity = "protective"
//! weight = 2
//!
//! [[tiers]]
//! tier = "low"
//! max_score = 1
//! label = "Sleep looks healthy."
//! advice = "Keep your routine."
//! meal_plan = { breakfast = "...", lunch = "...", snack = "...", dinner = "..." }
//!
//! [[tiers]]
//! tier = "high"
//! label = "..."
//! advice = "..."
//! meal_plan = { breakfast = "...", lunch = "...", snack = "...", dinner = "..." }
//! ```
//!
//! The last tier omits `max_score` and takes every higher score.

use quiz_domain::{
    Category, DomainError, MealPlan, Polarity, Question, Questionnaire, RecommendationBundle,
    RecommendationTable, RiskTier, TierColor, TierThreshold, TierThresholds,
};
use serde::Deserialize;

fn default_weight() -> u32 {
    1
}

/// One `[[questions]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileQuestion {
    pub text: String,
    pub category: Category,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub polarity: Polarity,
}

/// One `[[tiers]]` entry: a score band and the content shown for it
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileTier {
    pub tier: RiskTier,
    /// Inclusive upper bound; omitted on the last band
    pub max_score: Option<u32>,
    pub label: String,
    pub color: Option<TierColor>,
    pub advice: String,
    #[serde(default)]
    pub workouts: Vec<String>,
    #[serde(default)]
    pub diet: Vec<String>,
    pub meal_plan: MealPlan,
}

/// A complete questionnaire file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileQuestionnaire {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub disclaimer: Option<String>,
    #[serde(default)]
    pub questions: Vec<FileQuestion>,
    #[serde(default)]
    pub tiers: Vec<FileTier>,
}

impl FileQuestionnaire {
    /// Convert into a validated domain questionnaire
    pub fn into_questionnaire(self) -> Result<Questionnaire, DomainError> {
        let questions = self
            .questions
            .into_iter()
            .map(|q| Question::try_new(q.text, q.category, q.weight, q.polarity))
            .collect::<Result<Vec<_>, _>>()?;

        let bands = self
            .tiers
            .iter()
            .map(|t| match t.max_score {
                Some(max) => TierThreshold::up_to(max, t.tier),
                None => TierThreshold::unbounded(t.tier),
            })
            .collect();
        let thresholds = TierThresholds::new(bands)?;

        let bundles = self
            .tiers
            .into_iter()
            .map(|t| {
                let color = t.color.unwrap_or_else(|| TierColor::for_tier(t.tier));
                RecommendationBundle::new(t.tier, t.label, t.advice, t.meal_plan)
                    .with_color(color)
                    .with_workouts(t.workouts)
                    .with_diet(t.diet)
            })
            .collect();
        let recommendations = RecommendationTable::new(bundles)?;

        let mut questionnaire =
            Questionnaire::new(self.id, self.title, questions, thresholds, recommendations)?
                .with_description(self.description);
        if let Some(disclaimer) = self.disclaimer {
            questionnaire = questionnaire.with_disclaimer(disclaimer);
        }
        Ok(questionnaire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_domain::{Answer, DEFAULT_DISCLAIMER};

    const SLEEP: &str = r#"
id = "sleep"
title = "Sleep Quality Check"
description = "A few questions about rest."

[[questions]]
text = "Do you wake up tired most mornings?"
category = "symptom"

[[questions]]
text = "Do you snore loudly?"
category = "symptom"
weight = 2

[[questions]]
text = "Do you keep a regular bedtime?"
category = "lifestyle"
polarity = "protective"

[[tiers]]
tier = "low"
max_score = 1
label = "Sleep looks healthy."
advice = "Keep your routine."
workouts = ["Morning walk"]
diet = ["No caffeine after noon"]
meal_plan = { breakfast = "Oats", lunch = "Salad", snack = "Almonds", dinner = "Fish" }

[[tiers]]
tier = "high"
label = "Several sleep risk factors."
color = "red"
advice = "Talk to a provider about a sleep study."
meal_plan = { breakfast = "Eggs", lunch = "Soup", snack = "Banana", dinner = "Chicken" }
"#;

    #[test]
    fn test_parse_and_convert() {
        let file: FileQuestionnaire = toml::from_str(SLEEP).unwrap();
        let quiz = file.into_questionnaire().unwrap();

        assert_eq!(quiz.id(), "sleep");
        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz.max_score(), 4);
        assert_eq!(quiz.disclaimer(), DEFAULT_DISCLAIMER);
        assert_eq!(quiz.questions()[1].weight(), 2);
        assert_eq!(quiz.questions()[2].polarity(), Polarity::Protective);

        let mut answers = quiz.empty_answers();
        answers.set(1, Answer::Yes);
        let outcome = quiz.evaluate(&answers).unwrap();
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.tier, RiskTier::High);
        assert_eq!(outcome.recommendation.color, TierColor::Red);
    }

    #[test]
    fn test_custom_disclaimer() {
        let source = format!("disclaimer = \"Not medical advice.\"\n{}", SLEEP);
        let file: FileQuestionnaire = toml::from_str(&source).unwrap();
        let quiz = file.into_questionnaire().unwrap();
        assert_eq!(quiz.disclaimer(), "Not medical advice.");
    }

    #[test]
    fn test_zero_weight_rejected() {
        let source = SLEEP.replace("weight = 2", "weight = 0");
        let file: FileQuestionnaire = toml::from_str(&source).unwrap();
        assert!(matches!(
            file.into_questionnaire(),
            Err(DomainError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn test_huge_weights_rejected() {
        let source = r#"
id = "heavy"
title = "Heavy"

[[questions]]
text = "First?"
category = "symptom"
weight = 4294967295

[[questions]]
text = "Second?"
category = "symptom"
weight = 4294967295

[[tiers]]
tier = "low"
label = "x"
advice = "y"
meal_plan = { breakfast = "a", lunch = "b", snack = "c", dinner = "d" }
"#;
        let file: FileQuestionnaire = toml::from_str(source).unwrap();
        assert!(matches!(
            file.into_questionnaire(),
            Err(DomainError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn test_bounded_last_tier_rejected() {
        let source = SLEEP.replace("color = \"red\"", "max_score = 10");
        let file: FileQuestionnaire = toml::from_str(&source).unwrap();
        assert!(matches!(
            file.into_questionnaire(),
            Err(DomainError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn test_no_questions_rejected() {
        let source = r#"
id = "empty"
title = "Empty"

[[tiers]]
tier = "low"
label = "x"
advice = "y"
meal_plan = { breakfast = "a", lunch = "b", snack = "c", dinner = "d" }
"#;
        let file: FileQuestionnaire = toml::from_str(source).unwrap();
        assert_eq!(
            file.into_questionnaire().unwrap_err(),
            DomainError::EmptyQuestionnaire
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let source = format!("{}\nextra = true\n", "id = \"x\"\ntitle = \"X\"");
        assert!(toml::from_str::<FileQuestionnaire>(&source).is_err());
    }
}
