//! Service layer for table recommendation: filter, score, select.

use crate::table_assignment::{
    domain::{
        PartySize, Recommendation, RecommendationConfig, RestaurantScope, ScoredCandidate,
        SeatingPreference, Table, TableAssignmentDomainError, filter_eligible, rank_candidates,
        select_recommendation,
    },
    ports::{TableStore, TableStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for recommending a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendTableRequest {
    scope: String,
    party_size: i64,
    preference: SeatingPreference,
}

impl RecommendTableRequest {
    /// Creates a request with required fields and no preferences.
    #[must_use]
    pub fn new(scope: impl Into<String>, party_size: i64) -> Self {
        Self {
            scope: scope.into(),
            party_size,
            preference: SeatingPreference::new(),
        }
    }

    /// Replaces the whole preference set.
    #[must_use]
    pub fn with_preference(mut self, preference: SeatingPreference) -> Self {
        self.preference = preference;
        self
    }

    /// Sets the preferred zone.
    #[must_use]
    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.preference = self.preference.with_zone(zone);
        self
    }

    /// Sets the desired feature tags.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preference = self.preference.with_features(features);
        self
    }

    /// Requests child-friendly amenities.
    #[must_use]
    pub fn with_child_friendly(mut self, child_friendly: bool) -> Self {
        self.preference = self.preference.with_child_friendly(child_friendly);
        self
    }

    /// Requests wheelchair access.
    #[must_use]
    pub fn with_wheelchair(mut self, wheelchair: bool) -> Self {
        self.preference = self.preference.with_wheelchair(wheelchair);
        self
    }
}

/// Service-level errors for table recommendation.
#[derive(Debug, Error)]
pub enum RecommendationError {
    /// The request was malformed.
    #[error(transparent)]
    InvalidArgument(#[from] TableAssignmentDomainError),
    /// The table store failed.
    #[error(transparent)]
    Store(#[from] TableStoreError),
}

/// Result type for table recommendation operations.
pub type RecommendationResult<T> = Result<T, RecommendationError>;

/// Table recommendation orchestration service.
#[derive(Clone)]
pub struct TableRecommendationService<T>
where
    T: TableStore,
{
    tables: Arc<T>,
    config: RecommendationConfig,
}

impl<T> TableRecommendationService<T>
where
    T: TableStore,
{
    /// Creates a service with the default configuration.
    #[must_use]
    pub fn new(tables: Arc<T>) -> Self {
        Self::with_config(tables, RecommendationConfig::default())
    }

    /// Creates a service with a custom configuration.
    #[must_use]
    pub const fn with_config(tables: Arc<T>, config: RecommendationConfig) -> Self {
        Self { tables, config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Recommends the best table plus runners-up.
    ///
    /// An empty eligible set yields [`Recommendation::NoTableAvailable`].
    ///
    /// # Errors
    ///
    /// Returns [`RecommendationError::InvalidArgument`] for a blank scope or a
    /// non-positive party size, and [`RecommendationError::Store`] when the
    /// table store read fails.
    pub async fn recommend(
        &self,
        request: RecommendTableRequest,
    ) -> RecommendationResult<Recommendation> {
        let ranked = self.rank(request).await?;
        let recommendation = select_recommendation(ranked, self.config.max_alternatives);
        match recommendation.recommended() {
            Some(candidate) => info!(
                table_id = %candidate.table().id(),
                table = candidate.table().name(),
                score = candidate.score(),
                alternatives = recommendation.alternatives().len(),
                "table recommended"
            ),
            None => info!("no eligible table available"),
        }
        Ok(recommendation)
    }

    /// Returns every eligible table scored and in rank order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::recommend`].
    pub async fn rank(
        &self,
        request: RecommendTableRequest,
    ) -> RecommendationResult<Vec<ScoredCandidate>> {
        let RecommendTableRequest {
            scope,
            party_size,
            preference,
        } = request;
        let restaurant = RestaurantScope::new(scope)?;
        let guests = PartySize::new(party_size)?;

        let listed = self
            .tables
            .list_eligible_tables(&restaurant, guests)
            .await?;
        let listed_count = listed.len();
        // Re-applied so scope, eligibility and ordering hold for any store.
        let in_scope: Vec<Table> = listed
            .into_iter()
            .filter(|table| table.scope() == &restaurant)
            .collect();
        let eligible = filter_eligible(in_scope, guests);
        debug!(
            scope = %restaurant,
            party_size = guests.value(),
            listed = listed_count,
            eligible = eligible.len(),
            "eligible tables loaded"
        );

        Ok(rank_candidates(&eligible, guests, &preference, &self.config))
    }
}
