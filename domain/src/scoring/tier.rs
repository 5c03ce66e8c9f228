//! Risk tiers and the thresholds that map a score onto them

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Discrete risk band, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High];

    /// Ordinal rank (0 = least severe)
    pub fn rank(&self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Moderate => 1,
            RiskTier::High => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskTier::Low),
            "moderate" | "medium" => Ok(RiskTier::Moderate),
            "high" => Ok(RiskTier::High),
            _ => Err(format!(
                "Unknown risk tier: {}. Valid: low, moderate, high",
                s
            )),
        }
    }
}

/// One band of a threshold table: scores up to `max_inclusive` map to `tier`.
/// `None` marks the unbounded last band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierThreshold {
    pub max_inclusive: Option<u32>,
    pub tier: RiskTier,
}

impl TierThreshold {
    pub fn up_to(max_inclusive: u32, tier: RiskTier) -> Self {
        Self {
            max_inclusive: Some(max_inclusive),
            tier,
        }
    }

    pub fn unbounded(tier: RiskTier) -> Self {
        Self {
            max_inclusive: None,
            tier,
        }
    }
}

/// Ordered threshold table covering every score in `[0, ∞)`
///
/// Construction validates that bounds and tier ranks are strictly ascending and
/// that exactly the last band is unbounded, so the bands partition the score
/// range with no gaps and no overlaps.
///
/// # Example
///
/// ```
/// use quiz_domain::{RiskTier, TierThreshold, TierThresholds};
///
/// let thresholds = TierThresholds::new(vec![
///     TierThreshold::up_to(3, RiskTier::Low),
///     TierThreshold::up_to(8, RiskTier::Moderate),
///     TierThreshold::unbounded(RiskTier::High),
/// ])
/// .unwrap();
///
/// assert_eq!(thresholds.classify(3), RiskTier::Low);
/// assert_eq!(thresholds.classify(4), RiskTier::Moderate);
/// assert_eq!(thresholds.classify(9), RiskTier::High);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TierThresholds {
    bands: Vec<TierThreshold>,
}

impl TierThresholds {
    pub fn new(bands: Vec<TierThreshold>) -> Result<Self, DomainError> {
        let Some((last, rest)) = bands.split_last() else {
            return Err(DomainError::InvalidThresholds(
                "at least one tier is required".to_string(),
            ));
        };

        if last.max_inclusive.is_some() {
            return Err(DomainError::InvalidThresholds(format!(
                "last tier '{}' must be unbounded",
                last.tier
            )));
        }

        let mut previous_bound: Option<u32> = None;
        for band in rest {
            let Some(bound) = band.max_inclusive else {
                return Err(DomainError::InvalidThresholds(format!(
                    "only the last tier may be unbounded, '{}' is not last",
                    band.tier
                )));
            };
            if previous_bound.is_some_and(|prev| bound <= prev) {
                return Err(DomainError::InvalidThresholds(format!(
                    "bounds must be strictly ascending ({} follows {})",
                    bound,
                    previous_bound.unwrap_or_default()
                )));
            }
            previous_bound = Some(bound);
        }

        if bands.windows(2).any(|w| w[0].tier.rank() >= w[1].tier.rank()) {
            return Err(DomainError::InvalidThresholds(
                "tiers must be listed from least to most severe without repeats".to_string(),
            ));
        }

        Ok(Self { bands })
    }

    /// Three-band table: `≤ low_max → Low`, `≤ moderate_max → Moderate`, else `High`
    pub fn three_band(low_max: u32, moderate_max: u32) -> Result<Self, DomainError> {
        Self::new(vec![
            TierThreshold::up_to(low_max, RiskTier::Low),
            TierThreshold::up_to(moderate_max, RiskTier::Moderate),
            TierThreshold::unbounded(RiskTier::High),
        ])
    }

    pub fn bands(&self) -> &[TierThreshold] {
        &self.bands
    }

    /// Tiers reachable through this table, least severe first
    pub fn tiers(&self) -> impl Iterator<Item = RiskTier> + '_ {
        self.bands.iter().map(|b| b.tier)
    }

    /// Map a score onto its tier: the first band whose bound is `>= score`
    pub fn classify(&self, score: u32) -> RiskTier {
        self.bands
            .iter()
            .find(|band| band.max_inclusive.is_none_or(|max| score <= max))
            .map(|band| band.tier)
            // The unbounded last band always matches; validated in `new`.
            .unwrap_or(RiskTier::High)
    }

    /// Human-readable range covered by the band at `index` (e.g. "4-8", "9+")
    pub fn range_label(&self, index: usize) -> Option<String> {
        let band = self.bands.get(index)?;
        let lower = match index {
            0 => 0,
            _ => self.bands[index - 1].max_inclusive.map_or(0, |m| m + 1),
        };
        Some(match band.max_inclusive {
            Some(max) if max == lower => format!("{}", max),
            Some(max) => format!("{}-{}", lower, max),
            None => format!("{}+", lower),
        })
    }
}

impl<'de> Deserialize<'de> for TierThresholds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bands = Vec::<TierThreshold>::deserialize(deserializer)?;
        TierThresholds::new(bands).map_err(serde::de::Error::custom)
    }
}

/// Free-function form of [`TierThresholds::classify`]
pub fn classify(score: u32, thresholds: &TierThresholds) -> RiskTier {
    thresholds.classify(score)
}
