//! Recommendation content keyed by risk tier

pub mod bundle;
pub mod table;

pub use bundle::{MealPlan, RecommendationBundle, TierColor};
pub use table::{RecommendationTable, get_recommendation};
