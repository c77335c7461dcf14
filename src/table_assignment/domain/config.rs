//! Tunable weights and limits for table recommendation.

use serde::{Deserialize, Serialize};

/// Points awarded by each scoring rule.
///
/// # Examples
///
/// ```
/// use maitre::table_assignment::domain::ScoringWeights;
///
/// let weights = ScoringWeights::default();
/// assert_eq!(weights.perfect_fit, 100);
/// assert_eq!(weights.zone_match, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Capacity equals party size.
    pub perfect_fit: u32,
    /// Capacity is at most one and a half times the party size.
    pub comfortable_fit: u32,
    /// Capacity is at most twice the party size.
    pub oversized_fit: u32,
    /// Capacity is more than twice the party size.
    pub large_fit: u32,
    /// Table zone equals the preferred zone.
    pub zone_match: u32,
    /// Awarded once per requested feature the table carries.
    pub per_feature: u32,
    /// Child-friendly table for a party that asked for one.
    pub child_friendly: u32,
    /// Wheelchair-accessible table for a party that asked for one.
    pub wheelchair: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            perfect_fit: 100,
            comfortable_fit: 80,
            oversized_fit: 60,
            large_fit: 40,
            zone_match: 20,
            per_feature: 10,
            child_friendly: 15,
            wheelchair: 15,
        }
    }
}

/// Configuration for the recommendation engine.
///
/// Deserializes with defaults for every missing field so embedders can
/// override only what they need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Rule weights.
    pub weights: ScoringWeights,
    /// Table feature tag that satisfies a child-friendly request.
    pub child_friendly_tag: String,
    /// Table feature tag that satisfies a wheelchair request.
    pub wheelchair_tag: String,
    /// Maximum number of runners-up returned next to the recommendation.
    pub max_alternatives: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            child_friendly_tag: "child-friendly".to_owned(),
            wheelchair_tag: "wheelchair-accessible".to_owned(),
            max_alternatives: 2,
        }
    }
}

impl RecommendationConfig {
    /// Returns a configuration that only reports the top candidate.
    #[must_use]
    pub fn without_alternatives() -> Self {
        Self {
            max_alternatives: 0,
            ..Self::default()
        }
    }
}
