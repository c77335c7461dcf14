//! Store port for reading eligible tables and transitioning table status.

use crate::table_assignment::domain::{PartySize, RestaurantScope, Table, TableId, TableStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for table store operations.
pub type TableStoreResult<T> = Result<T, TableStoreError>;

/// Table persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Returns tables in `scope` that are active, available and seat at least
    /// `party_size` guests, ordered by ascending capacity.
    ///
    /// An empty result is not an error.
    async fn list_eligible_tables(
        &self,
        scope: &RestaurantScope,
        party_size: PartySize,
    ) -> TableStoreResult<Vec<Table>>;

    /// Finds a table by identifier.
    ///
    /// Returns `None` when the table does not exist.
    async fn find_by_id(&self, id: TableId) -> TableStoreResult<Option<Table>>;

    /// Moves a table to `status` only if its current status is still
    /// `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`TableStoreError::NotFound`] when the table does not exist and
    /// [`TableStoreError::Conflict`] when its status no longer matches
    /// `expected`.
    async fn set_table_status(
        &self,
        id: TableId,
        expected: TableStatus,
        status: TableStatus,
        updated_at: DateTime<Utc>,
    ) -> TableStoreResult<()>;
}

/// Errors returned by table store implementations.
#[derive(Debug, Clone, Error)]
pub enum TableStoreError {
    /// The table was not found.
    #[error("table not found: {0}")]
    NotFound(TableId),

    /// The table status changed since it was read.
    #[error("table {table_id} is {actual}, expected {expected}")]
    Conflict {
        /// Contested table.
        table_id: TableId,
        /// Status the caller expected.
        expected: TableStatus,
        /// Status found in the store.
        actual: TableStatus,
    },

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// The store could not be reached.
    #[error("table store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TableStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a connectivity or driver error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
