//! Risk scoring engine
//!
//! Pure functions parameterised by declarative tables:
//!
//! ```text
//!   AnswerSet ──┐
//!               ├─> compute_score ─> classify ─> RiskTier ─> RecommendationTable
//!   Questions ──┘        (u32)      (thresholds)
//! ```
//!
//! Nothing here performs I/O or holds mutable state; every function can be
//! called repeatedly and from any thread.

pub mod score;
pub mod tier;

pub use score::{RiskSummary, compute_score, max_score, risk_summary};
pub use tier::{RiskTier, TierThreshold, TierThresholds, classify};
