//! Eligibility filtering, ranking and top-candidate selection.

use super::{PartySize, RecommendationConfig, ScoredCandidate, SeatingPreference, Table, score_table};
use serde::{Deserialize, Serialize};

/// Outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Recommendation {
    /// At least one eligible table exists.
    Recommended {
        /// Highest-scoring table.
        recommended: ScoredCandidate,
        /// Runners-up in rank order.
        alternatives: Vec<ScoredCandidate>,
    },
    /// No table passed eligibility. Callers fall back to waitlisting or
    /// manual assignment.
    NoTableAvailable,
}

impl Recommendation {
    /// Returns the recommended candidate, if any.
    #[must_use]
    pub const fn recommended(&self) -> Option<&ScoredCandidate> {
        match self {
            Self::Recommended { recommended, .. } => Some(recommended),
            Self::NoTableAvailable => None,
        }
    }

    /// Returns the runners-up; empty when no table is available.
    #[must_use]
    pub fn alternatives(&self) -> &[ScoredCandidate] {
        match self {
            Self::Recommended { alternatives, .. } => alternatives,
            Self::NoTableAvailable => &[],
        }
    }

    /// Returns `true` when no table could be offered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoTableAvailable)
    }
}

/// Keeps only eligible tables, ordered by ascending capacity.
///
/// The sort is stable, so tables of equal capacity keep their incoming
/// order.
#[must_use]
pub fn filter_eligible(tables: Vec<Table>, party_size: PartySize) -> Vec<Table> {
    let mut eligible: Vec<Table> = tables
        .into_iter()
        .filter(|table| table.is_eligible_for(party_size))
        .collect();
    eligible.sort_by_key(Table::capacity);
    eligible
}

/// Scores every table and orders them by descending score.
///
/// Ties keep the incoming order, which favours smaller tables when the input
/// comes from [`filter_eligible`].
#[must_use]
pub fn rank_candidates(
    tables: &[Table],
    party_size: PartySize,
    preference: &SeatingPreference,
    config: &RecommendationConfig,
) -> Vec<ScoredCandidate> {
    let mut candidates: Vec<ScoredCandidate> = tables
        .iter()
        .map(|table| score_table(table, party_size, preference, config))
        .collect();
    candidates.sort_by(|left, right| right.score().cmp(&left.score()));
    candidates
}

/// Picks the top candidate and up to `max_alternatives` runners-up from an
/// already ranked list.
#[must_use]
pub fn select_recommendation(
    ranked: Vec<ScoredCandidate>,
    max_alternatives: usize,
) -> Recommendation {
    let mut ranked_iter = ranked.into_iter();
    match ranked_iter.next() {
        Some(recommended) => Recommendation::Recommended {
            recommended,
            alternatives: ranked_iter.take(max_alternatives).collect(),
        },
        None => Recommendation::NoTableAvailable,
    }
}
