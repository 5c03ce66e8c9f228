//! Cardiovascular health risk questionnaire

use crate::core::error::DomainError;
use crate::core::question::{Category, Question};
use crate::questionnaire::Questionnaire;
use crate::recommendation::{MealPlan, RecommendationBundle, RecommendationTable};
use crate::scoring::{RiskTier, TierThresholds};

pub const ID: &str = "cardio";

/// `≤3 → Low`, `≤8 → Moderate`, `>8 → High`
pub const LOW_MAX: u32 = 3;
pub const MODERATE_MAX: u32 = 8;

fn questions() -> Vec<Question> {
    use Category::*;
    vec![
        Question::new(
            "Do you experience chest pain or discomfort? (Especially during physical activity or emotional stress)",
            Symptom,
        ),
        Question::new(
            "Do you feel shortness of breath during exercise or while lying down?",
            Symptom,
        ),
        Question::new(
            "Have you experienced heart palpitations (rapid, fluttering, or pounding heartbeat)?",
            Symptom,
        ),
        Question::new(
            "Do you feel fatigue or weakness more than usual, especially with activity?",
            Symptom,
        ),
        Question::new(
            "Have you noticed swelling in your ankles, feet, or legs (edema)?",
            Symptom,
        ),
        Question::new(
            "Do you ever feel lightheaded, dizzy, or have fainted?",
            Symptom,
        ),
        Question::new("Do you have pain in your arms, neck, jaw, or back?", Symptom),
        Question::new(
            "Have you ever been diagnosed with high blood pressure (hypertension)?",
            History,
        ),
        Question::new("Do you have diabetes or high blood sugar levels?", History),
        Question::new("Do you have high cholesterol or triglycerides?", History),
        Question::new(
            "Have you ever had a heart attack, stroke, or mini-stroke (TIA)?",
            History,
        ),
        Question::new(
            "Are you currently taking any medications for heart, blood pressure, or cholesterol?",
            History,
        ),
        Question::new(
            "Does anyone in your family have a history of heart disease or stroke?",
            Family,
        ),
        Question::new(
            "Did any of your close relatives die from a heart condition before age 55 (men) or 65 (women)?",
            Family,
        ),
        Question::new("Do you smoke or use tobacco products?", Lifestyle),
        Question::new(
            "Do you drink alcohol frequently or in large amounts?",
            Lifestyle,
        ),
        Question::protective(
            "Do you exercise regularly (at least 150 minutes/week)?",
            Lifestyle,
        ),
        Question::protective(
            "Do you follow a heart-healthy diet low in saturated fats, salt, and sugar?",
            Lifestyle,
        ),
        Question::new("Are you overweight or obese (BMI > 25)?", Lifestyle),
        Question::new(
            "Do you experience a lot of stress, anxiety, or sleep disturbances?",
            Lifestyle,
        ),
    ]
}

fn recommendations() -> Result<RecommendationTable, DomainError> {
    RecommendationTable::new(vec![
        RecommendationBundle::new(
            RiskTier::Low,
            "Low number of risk factors.",
            "Keep up your current habits. Stay active, eat a balanced diet and keep up with routine check-ups.",
            MealPlan::new(
                "Oatmeal with berries and a handful of walnuts",
                "Grilled chicken salad with olive oil and lemon dressing",
                "Apple slices with almond butter",
                "Baked salmon with quinoa and steamed broccoli",
            ),
        )
        .with_workouts([
            "Brisk walking, 30 minutes, 5 days a week",
            "Cycling or swimming twice a week",
            "Light strength training, 2 sessions a week",
        ])
        .with_diet([
            "Fill half your plate with vegetables and fruit",
            "Choose whole grains over refined grains",
            "Eat fish at least twice a week",
        ]),
        RecommendationBundle::new(
            RiskTier::Moderate,
            "Some risk factors present. Consider consulting a healthcare provider if concerned.",
            "Schedule a check of blood pressure, cholesterol and blood sugar. Small, steady lifestyle changes make a measurable difference.",
            MealPlan::new(
                "Greek yogurt with ground flaxseed and sliced banana",
                "Lentil soup with a side of mixed greens",
                "Carrot and cucumber sticks with hummus",
                "Turkey stir-fry with brown rice and bell peppers",
            ),
        )
        .with_workouts([
            "Walking, 20 to 30 minutes daily, building up gradually",
            "Low-impact aerobics or water exercise 2 to 3 times a week",
            "Gentle stretching or yoga for stress relief",
        ])
        .with_diet([
            "Limit salt to under 2,300 mg per day",
            "Replace butter and lard with olive or canola oil",
            "Cut back on sugary drinks and processed snacks",
            "Limit alcohol",
        ]),
        RecommendationBundle::new(
            RiskTier::High,
            "Multiple possible risk factors identified. Please consider discussing your cardiovascular health with your healthcare provider.",
            "Talk to your healthcare provider before starting a new exercise program. Seek urgent care for chest pain, fainting or sudden shortness of breath.",
            MealPlan::new(
                "Steel-cut oats with cinnamon and fresh berries, no added sugar",
                "Bean and vegetable salad with a light vinaigrette",
                "Unsalted almonds and an orange",
                "Steamed cod with roasted sweet potato and spinach",
            ),
        )
        .with_workouts([
            "Short supervised walks, 10 to 15 minutes, as cleared by your provider",
            "Seated or chair-based exercises",
            "Breathing exercises and relaxation techniques",
        ])
        .with_diet([
            "Follow a DASH-style eating plan",
            "Keep salt under 1,500 mg per day",
            "Avoid fried foods, processed meats and trans fats",
            "Avoid tobacco and alcohol",
        ]),
    ])
}

/// Build the 20-question cardiovascular questionnaire
pub fn questionnaire() -> Result<Questionnaire, DomainError> {
    Ok(Questionnaire::new(
        ID,
        "Cardio Health Risk Quiz",
        questions(),
        TierThresholds::three_band(LOW_MAX, MODERATE_MAX)?,
        recommendations()?,
    )?
    .with_description(
        "Answer these quick questions to get a sense of your cardiovascular risk factors, symptoms, and lifestyle habits. Your responses stay private and no information is stored.",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answer::Answer;
    use crate::core::answer_set::AnswerSet;
    use crate::core::question::Polarity;

    fn answers(list: impl IntoIterator<Item = Answer>) -> AnswerSet {
        list.into_iter().map(Some).collect()
    }

    #[test]
    fn test_builds() {
        let quiz = questionnaire().unwrap();
        assert_eq!(quiz.len(), 20);
        assert_eq!(quiz.max_score(), 20);
    }

    #[test]
    fn test_protective_questions() {
        let quiz = questionnaire().unwrap();
        let protective: Vec<usize> = quiz
            .questions()
            .iter()
            .enumerate()
            .filter(|(_, q)| q.polarity() == Polarity::Protective)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(protective, vec![16, 17]);
    }

    #[test]
    fn test_healthiest_answers_score_zero() {
        let quiz = questionnaire().unwrap();
        let set: AnswerSet = quiz
            .questions()
            .iter()
            .map(|q| match q.polarity() {
                Polarity::RiskPositive => Some(Answer::No),
                Polarity::Protective => Some(Answer::Yes),
            })
            .collect();
        let outcome = quiz.evaluate(&set).unwrap();
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.tier, RiskTier::Low);
        assert_eq!(outcome.summary.risk_count, 0);
    }

    #[test]
    fn test_riskiest_answers_score_max() {
        let quiz = questionnaire().unwrap();
        let set: AnswerSet = quiz
            .questions()
            .iter()
            .map(|q| match q.polarity() {
                Polarity::RiskPositive => Some(Answer::Yes),
                Polarity::Protective => Some(Answer::No),
            })
            .collect();
        let outcome = quiz.evaluate(&set).unwrap();
        assert_eq!(outcome.score, quiz.max_score());
        assert_eq!(outcome.tier, RiskTier::High);
    }

    #[test]
    fn test_first_sixteen_yes_rest_no() {
        let quiz = questionnaire().unwrap();
        let set = answers(
            std::iter::repeat_n(Answer::Yes, 16).chain(std::iter::repeat_n(Answer::No, 4)),
        );
        // 16 risk answers + exercise "no" + diet "no"; overweight and stress "no" add nothing
        let outcome = quiz.evaluate(&set).unwrap();
        assert_eq!(outcome.score, 18);
        assert_eq!(outcome.tier, RiskTier::High);
    }

    #[test]
    fn test_all_unsure() {
        let quiz = questionnaire().unwrap();
        let set = answers(std::iter::repeat_n(Answer::Unsure, 20));
        let outcome = quiz.evaluate(&set).unwrap();
        assert_eq!(outcome.score, 20);
        assert_eq!(outcome.tier, RiskTier::High);
        assert_eq!(outcome.summary.risk_count, 20);
    }

    #[test]
    fn test_threshold_boundaries() {
        let quiz = questionnaire().unwrap();
        let t = quiz.thresholds();
        assert_eq!(t.classify(3), RiskTier::Low);
        assert_eq!(t.classify(4), RiskTier::Moderate);
        assert_eq!(t.classify(8), RiskTier::Moderate);
        assert_eq!(t.classify(9), RiskTier::High);
    }

    #[test]
    fn test_every_tier_has_content() {
        let quiz = questionnaire().unwrap();
        for tier in RiskTier::ALL {
            let bundle = quiz.recommendations().get(tier).unwrap();
            assert!(!bundle.workouts.is_empty());
            assert!(!bundle.diet.is_empty());
            assert!(!bundle.meal_plan.dinner.is_empty());
        }
    }
}
