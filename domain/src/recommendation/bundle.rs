//! Recommendation content attached to a risk tier

use crate::scoring::RiskTier;
use serde::{Deserialize, Serialize};

/// Severity marker used when rendering a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierColor {
    Green,
    Yellow,
    Red,
}

impl TierColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierColor::Green => "green",
            TierColor::Yellow => "yellow",
            TierColor::Red => "red",
        }
    }

    /// Default marker for a tier
    pub fn for_tier(tier: RiskTier) -> Self {
        match tier {
            RiskTier::Low => TierColor::Green,
            RiskTier::Moderate => TierColor::Yellow,
            RiskTier::High => TierColor::Red,
        }
    }
}

/// A sample day of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub snack: String,
    pub dinner: String,
}

impl MealPlan {
    pub fn new(
        breakfast: impl Into<String>,
        lunch: impl Into<String>,
        snack: impl Into<String>,
        dinner: impl Into<String>,
    ) -> Self {
        Self {
            breakfast: breakfast.into(),
            lunch: lunch.into(),
            snack: snack.into(),
            dinner: dinner.into(),
        }
    }

    /// Meals in serving order, paired with their names
    pub fn meals(&self) -> [(&'static str, &str); 4] {
        [
            ("Breakfast", &self.breakfast),
            ("Lunch", &self.lunch),
            ("Snack", &self.snack),
            ("Dinner", &self.dinner),
        ]
    }
}

/// Everything shown to the respondent for one tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub tier: RiskTier,
    /// Short headline, e.g. "Low number of risk factors."
    pub label: String,
    pub color: TierColor,
    pub advice: String,
    pub workouts: Vec<String>,
    pub diet: Vec<String>,
    pub meal_plan: MealPlan,
}

impl RecommendationBundle {
    pub fn new(tier: RiskTier, label: impl Into<String>, advice: impl Into<String>, meal_plan: MealPlan) -> Self {
        Self {
            tier,
            label: label.into(),
            color: TierColor::for_tier(tier),
            advice: advice.into(),
            workouts: Vec::new(),
            diet: Vec::new(),
            meal_plan,
        }
    }

    pub fn with_color(mut self, color: TierColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_workouts<I, S>(mut self, workouts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.workouts = workouts.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_diet<I, S>(mut self, diet: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.diet = diet.into_iter().map(Into::into).collect();
        self
    }
}
