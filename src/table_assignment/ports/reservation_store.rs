//! Store port for linking reservations to tables.

use crate::table_assignment::domain::{Reservation, ReservationId, TableId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for reservation store operations.
pub type ReservationStoreResult<T> = Result<T, ReservationStoreError>;

/// Reservation persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Finds a reservation by identifier.
    ///
    /// Returns `None` when the reservation does not exist.
    async fn find_by_id(&self, id: ReservationId) -> ReservationStoreResult<Option<Reservation>>;

    /// Links the reservation to `table_id`, replacing any previous link.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationStoreError::NotFound`] when the reservation does
    /// not exist.
    async fn attach_table(
        &self,
        id: ReservationId,
        table_id: TableId,
        updated_at: DateTime<Utc>,
    ) -> ReservationStoreResult<()>;

    /// Removes the reservation's table link.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationStoreError::NotFound`] when the reservation does
    /// not exist.
    async fn detach_table(
        &self,
        id: ReservationId,
        updated_at: DateTime<Utc>,
    ) -> ReservationStoreResult<()>;
}

/// Errors returned by reservation store implementations.
#[derive(Debug, Clone, Error)]
pub enum ReservationStoreError {
    /// The reservation was not found.
    #[error("reservation not found: {0}")]
    NotFound(ReservationId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// The store could not be reached.
    #[error("reservation store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReservationStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a connectivity or driver error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
