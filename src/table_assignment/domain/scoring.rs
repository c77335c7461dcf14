//! Additive desirability scoring for eligible tables.
//!
//! Rules are applied in a fixed order so that the reason list is
//! reproducible:
//!
//! 1. capacity fit
//! 2. zone match
//! 3. feature overlap
//! 4. child-friendly bonus
//! 5. wheelchair bonus
//! 6. operator priority

use super::{PartySize, RecommendationConfig, ScoringWeights, SeatingPreference, Table};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How closely a table's capacity matches the party size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityFit {
    /// Capacity equals the party size.
    Perfect,
    /// Capacity is at most 1.5 times the party size.
    Comfortable,
    /// Capacity is at most twice the party size.
    Oversized,
    /// Capacity is more than twice the party size.
    Large,
}

impl CapacityFit {
    /// Classifies `capacity / party_size` without floating point.
    ///
    /// Returns `None` when the table cannot seat the party.
    #[must_use]
    pub fn classify(capacity: u32, party_size: PartySize) -> Option<Self> {
        let seats = u64::from(capacity);
        let guests = u64::from(party_size.value());
        match seats.cmp(&guests) {
            Ordering::Less => None,
            Ordering::Equal => Some(Self::Perfect),
            Ordering::Greater if seats * 2 <= guests * 3 => Some(Self::Comfortable),
            Ordering::Greater if seats <= guests * 2 => Some(Self::Oversized),
            Ordering::Greater => Some(Self::Large),
        }
    }

    /// Returns the points this band earns under `weights`.
    #[must_use]
    pub const fn points(self, weights: &ScoringWeights) -> u32 {
        match self {
            Self::Perfect => weights.perfect_fit,
            Self::Comfortable => weights.comfortable_fit,
            Self::Oversized => weights.oversized_fit,
            Self::Large => weights.large_fit,
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::Perfect => "perfect capacity match",
            Self::Comfortable => "comfortable capacity",
            Self::Oversized => "oversized capacity",
            Self::Large => "large capacity",
        }
    }
}

/// Why a table earned points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ScoreReason {
    /// Capacity-fit base score.
    CapacityFit {
        /// Capacity band.
        fit: CapacityFit,
    },
    /// Table sits in the preferred zone.
    ZoneMatch {
        /// Matched zone.
        zone: String,
    },
    /// Table carries some of the requested features.
    FeatureOverlap {
        /// Matched features, in request order.
        features: Vec<String>,
    },
    /// Child-friendly amenities were requested and present.
    ChildFriendly,
    /// Wheelchair access was requested and present.
    WheelchairAccessible,
    /// Operator-assigned tiebreaker weight.
    Priority {
        /// Raw weight.
        weight: u32,
    },
}

impl fmt::Display for ScoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityFit { fit } => f.write_str(fit.description()),
            Self::ZoneMatch { zone } => write!(f, "matches preferred zone: {zone}"),
            Self::FeatureOverlap { features } => {
                write!(f, "matched features: {}", features.join(", "))
            }
            Self::ChildFriendly => f.write_str("child-friendly amenities"),
            Self::WheelchairAccessible => f.write_str("wheelchair accessible"),
            Self::Priority { weight } => write!(f, "priority weight: {weight}"),
        }
    }
}

/// One additive term of a table's score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreContribution {
    /// Rule that fired.
    pub reason: ScoreReason,
    /// Points added by the rule.
    pub points: u32,
}

/// Eligible table annotated with its score and the terms that make it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    table: Table,
    score: u32,
    contributions: Vec<ScoreContribution>,
}

impl ScoredCandidate {
    /// Returns the scored table.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Consumes the candidate, returning the table.
    #[must_use]
    pub fn into_table(self) -> Table {
        self.table
    }

    /// Returns the total score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the score terms in rule order.
    #[must_use]
    pub fn contributions(&self) -> &[ScoreContribution] {
        &self.contributions
    }

    /// Returns the points earned from capacity fit alone.
    #[must_use]
    pub fn capacity_points(&self) -> u32 {
        self.contributions
            .iter()
            .find(|term| matches!(term.reason, ScoreReason::CapacityFit { .. }))
            .map_or(0, |term| term.points)
    }

    /// Returns human-readable reasons in rule order.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.contributions
            .iter()
            .map(|term| term.reason.to_string())
            .collect()
    }
}

/// Scores one table against the party size and preferences.
///
/// Never fails: absent preference fields simply contribute nothing, and a
/// table too small for the party earns no capacity points. The returned score
/// is the exact sum of the contribution points, saturating at `u32::MAX`.
#[must_use]
pub fn score_table(
    table: &Table,
    party_size: PartySize,
    preference: &SeatingPreference,
    config: &RecommendationConfig,
) -> ScoredCandidate {
    let weights = &config.weights;
    let mut contributions = Vec::new();

    if let Some(fit) = CapacityFit::classify(table.capacity(), party_size) {
        contributions.push(ScoreContribution {
            reason: ScoreReason::CapacityFit { fit },
            points: fit.points(weights),
        });
    }

    if let Some(zone) = preference.zone().filter(|zone| table.zone() == Some(*zone)) {
        contributions.push(ScoreContribution {
            reason: ScoreReason::ZoneMatch {
                zone: zone.to_owned(),
            },
            points: weights.zone_match,
        });
    }

    let matched: Vec<String> = preference
        .features()
        .iter()
        .filter(|feature| table.has_feature(feature))
        .cloned()
        .collect();
    if !matched.is_empty() {
        let count = u32::try_from(matched.len()).unwrap_or(u32::MAX);
        contributions.push(ScoreContribution {
            points: weights.per_feature.saturating_mul(count),
            reason: ScoreReason::FeatureOverlap { features: matched },
        });
    }

    if preference.child_friendly() && table.has_feature(&config.child_friendly_tag) {
        contributions.push(ScoreContribution {
            reason: ScoreReason::ChildFriendly,
            points: weights.child_friendly,
        });
    }

    if preference.wheelchair() && table.has_feature(&config.wheelchair_tag) {
        contributions.push(ScoreContribution {
            reason: ScoreReason::WheelchairAccessible,
            points: weights.wheelchair,
        });
    }

    // Missing and zero priority both count as no contribution.
    if let Some(weight) = table.assignment_priority().filter(|weight| *weight > 0) {
        contributions.push(ScoreContribution {
            reason: ScoreReason::Priority { weight },
            points: weight,
        });
    }

    let score = contributions
        .iter()
        .fold(0_u32, |total, term| total.saturating_add(term.points));

    ScoredCandidate {
        table: table.clone(),
        score,
        contributions,
    }
}
