//! Digestion and metabolism questionnaire
//!
//! Uses its own scale: two questions carry weight 2 and the thresholds are
//! `≤2 → Low`, `≤5 → Moderate`, `>5 → High`.

use crate::core::error::DomainError;
use crate::core::question::{Category, Question};
use crate::questionnaire::Questionnaire;
use crate::recommendation::{MealPlan, RecommendationBundle, RecommendationTable};
use crate::scoring::{RiskTier, TierThresholds};

pub const ID: &str = "digestion";

pub const LOW_MAX: u32 = 2;
pub const MODERATE_MAX: u32 = 5;

fn questions() -> Vec<Question> {
    use Category::*;
    vec![
        Question::new(
            "Do you often feel bloated or gassy after meals?",
            Symptom,
        ),
        Question::new(
            "Do you experience heartburn or acid reflux more than once a week?",
            Symptom,
        ),
        Question::new(
            "Do you have frequent constipation or diarrhea?",
            Symptom,
        ),
        Question::new(
            "Do you often feel tired or sluggish after eating?",
            Symptom,
        ),
        Question::new(
            "Have you had an unexplained weight gain or loss in the last six months?",
            Symptom,
        )
        .with_weight(2),
        Question::new(
            "Have you been diagnosed with a digestive or metabolic condition (IBS, celiac disease, thyroid disorder, insulin resistance)?",
            History,
        )
        .with_weight(2),
        Question::new(
            "Does anyone in your close family have diabetes or a thyroid disorder?",
            Family,
        ),
        Question::protective(
            "Do you eat fiber-rich foods (vegetables, whole grains, legumes) every day?",
            Lifestyle,
        ),
        Question::protective(
            "Do you drink at least 8 glasses of water a day?",
            Lifestyle,
        ),
        Question::new(
            "Do you regularly eat late at night or skip meals?",
            Lifestyle,
        ),
        Question::new(
            "Do you consume sugary drinks or highly processed foods most days?",
            Lifestyle,
        ),
    ]
}

fn recommendations() -> Result<RecommendationTable, DomainError> {
    RecommendationTable::new(vec![
        RecommendationBundle::new(
            RiskTier::Low,
            "Your digestion and metabolism look healthy.",
            "Keep eating regular, balanced meals and stay hydrated.",
            MealPlan::new(
                "Whole-grain toast with avocado and a boiled egg",
                "Quinoa bowl with chickpeas and roasted vegetables",
                "Kefir or plain yogurt with berries",
                "Grilled fish with brown rice and green beans",
            ),
        )
        .with_workouts([
            "A 10 to 15 minute walk after your largest meal",
            "Moderate cardio, 150 minutes a week",
        ])
        .with_diet([
            "Keep a steady meal schedule",
            "Include a fermented food daily",
        ]),
        RecommendationBundle::new(
            RiskTier::Moderate,
            "Some digestive or metabolic warning signs.",
            "Track your symptoms and meals for two weeks and share the log with a healthcare provider if they persist.",
            MealPlan::new(
                "Overnight oats with chia seeds and pear",
                "Lentil and vegetable soup with a slice of rye bread",
                "A handful of pumpkin seeds and a kiwi",
                "Baked chicken with roasted root vegetables",
            ),
        )
        .with_workouts([
            "Walking after meals, 15 minutes",
            "Yoga poses that support digestion, 3 times a week",
            "Strength training twice a week to support insulin sensitivity",
        ])
        .with_diet([
            "Increase fiber gradually to 25 to 30 g per day",
            "Limit fried and highly processed foods",
            "Avoid eating within 3 hours of bedtime",
        ]),
        RecommendationBundle::new(
            RiskTier::High,
            "Several digestive or metabolic risk factors identified. Please consider discussing them with your healthcare provider.",
            "Ask your provider about blood sugar, thyroid and digestive screening. Seek prompt care for blood in stool, severe pain or rapid unexplained weight loss.",
            MealPlan::new(
                "Scrambled eggs with spinach and a small portion of oats",
                "Steamed vegetables with rice and tofu",
                "Banana with a spoon of peanut butter",
                "Poached fish with mashed sweet potato and zucchini",
            ),
        )
        .with_workouts([
            "Gentle daily walks, 10 to 20 minutes",
            "Light stretching and breathing exercises",
        ])
        .with_diet([
            "Eat small, frequent meals",
            "Keep a food and symptom diary",
            "Cut out sugary drinks and alcohol",
        ]),
    ])
}

/// Build the digestion and metabolism questionnaire
pub fn questionnaire() -> Result<Questionnaire, DomainError> {
    Ok(Questionnaire::new(
        ID,
        "Digestion & Metabolism Check",
        questions(),
        TierThresholds::three_band(LOW_MAX, MODERATE_MAX)?,
        recommendations()?,
    )?
    .with_description(
        "A short check of digestive symptoms, metabolic history and eating habits.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answer::Answer;
    use crate::core::answer_set::AnswerSet;

    #[test]
    fn test_builds() {
        let quiz = questionnaire().unwrap();
        assert_eq!(quiz.len(), 11);
        assert_eq!(quiz.max_score(), 13);
    }

    #[test]
    fn test_weighted_questions_count_double() {
        let quiz = questionnaire().unwrap();
        let mut set = quiz.empty_answers();
        set.set(4, Answer::Yes);
        set.set(5, Answer::Unsure);
        assert_eq!(quiz.score(&set).unwrap(), 4);
        assert_eq!(quiz.evaluate(&set).unwrap().tier, RiskTier::Moderate);
    }

    #[test]
    fn test_own_thresholds() {
        let quiz = questionnaire().unwrap();
        let t = quiz.thresholds();
        assert_eq!(t.classify(2), RiskTier::Low);
        assert_eq!(t.classify(3), RiskTier::Moderate);
        assert_eq!(t.classify(5), RiskTier::Moderate);
        assert_eq!(t.classify(6), RiskTier::High);
    }

    #[test]
    fn test_protective_habits() {
        let quiz = questionnaire().unwrap();
        let set: AnswerSet = (0..quiz.len()).map(|_| Some(Answer::No)).collect();
        // Only the two missing habits count
        assert_eq!(quiz.score(&set).unwrap(), 2);
        assert_eq!(quiz.evaluate(&set).unwrap().tier, RiskTier::Low);
    }
}
