//! Domain model for table recommendation and assignment.
//!
//! Everything here is pure: eligibility, scoring and selection run in memory
//! over a table snapshot and never touch a store.

mod config;
mod error;
mod ids;
mod preference;
mod reservation;
mod scoring;
mod selection;
mod table;

pub use config::{RecommendationConfig, ScoringWeights};
pub use error::{ParseTableStatusError, TableAssignmentDomainError};
pub use ids::{PartySize, ReservationId, RestaurantScope, TableId};
pub use preference::SeatingPreference;
pub use reservation::Reservation;
pub use scoring::{CapacityFit, ScoreContribution, ScoreReason, ScoredCandidate, score_table};
pub use selection::{Recommendation, filter_eligible, rank_candidates, select_recommendation};
pub use table::{PersistedTableData, Table, TableStatus};
