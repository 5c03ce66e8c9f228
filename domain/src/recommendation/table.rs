//! Tier-keyed recommendation lookup

use super::bundle::RecommendationBundle;
use crate::core::error::DomainError;
use crate::scoring::{RiskTier, TierThresholds};
use serde::Serialize;

/// Static table holding one [`RecommendationBundle`] per tier
///
/// This is the single source of truth for advice content; callers look
/// bundles up by tier instead of carrying their own copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecommendationTable {
    bundles: Vec<RecommendationBundle>,
}

impl RecommendationTable {
    /// Build a table, rejecting duplicate tiers
    pub fn new(bundles: Vec<RecommendationBundle>) -> Result<Self, DomainError> {
        for (i, bundle) in bundles.iter().enumerate() {
            if bundles[..i].iter().any(|b| b.tier == bundle.tier) {
                return Err(DomainError::DuplicateRecommendation(
                    bundle.tier.to_string(),
                ));
            }
        }
        Ok(Self { bundles })
    }

    /// Ensure every tier reachable through `thresholds` has a bundle
    pub fn ensure_covers(&self, thresholds: &TierThresholds) -> Result<(), DomainError> {
        for tier in thresholds.tiers() {
            if self.get(tier).is_none() {
                return Err(DomainError::MissingRecommendation(tier.to_string()));
            }
        }
        Ok(())
    }

    pub fn get(&self, tier: RiskTier) -> Option<&RecommendationBundle> {
        self.bundles.iter().find(|b| b.tier == tier)
    }

    pub fn bundles(&self) -> &[RecommendationBundle] {
        &self.bundles
    }
}

/// Look up the bundle for a tier
///
/// Returns [`DomainError::MissingRecommendation`] if the table has no entry;
/// a table validated with [`RecommendationTable::ensure_covers`] never does
/// for tiers produced by the same thresholds.
pub fn get_recommendation(
    tier: RiskTier,
    table: &RecommendationTable,
) -> Result<&RecommendationBundle, DomainError> {
    table
        .get(tier)
        .ok_or_else(|| DomainError::MissingRecommendation(tier.to_string()))
}
