//! In-memory reservation store for tests and embedders without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::table_assignment::{
    domain::{Reservation, ReservationId, TableId},
    ports::{ReservationStore, ReservationStoreError, ReservationStoreResult},
};

/// Thread-safe in-memory reservation store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReservationStore {
    state: Arc<RwLock<HashMap<ReservationId, Reservation>>>,
}

impl InMemoryReservationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`ReservationStoreError::Unavailable`] when the lock is
    /// poisoned.
    pub fn insert(&self, reservation: Reservation) -> ReservationStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ReservationStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        state.insert(reservation.id(), reservation);
        Ok(())
    }

    fn relink(
        &self,
        id: ReservationId,
        table_id: Option<TableId>,
        updated_at: DateTime<Utc>,
    ) -> ReservationStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ReservationStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        let reservation = state
            .get_mut(&id)
            .ok_or(ReservationStoreError::NotFound(id))?;
        reservation.set_table(table_id, updated_at);
        Ok(())
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn find_by_id(&self, id: ReservationId) -> ReservationStoreResult<Option<Reservation>> {
        let state = self.state.read().map_err(|err| {
            ReservationStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.get(&id).cloned())
    }

    async fn attach_table(
        &self,
        id: ReservationId,
        table_id: TableId,
        updated_at: DateTime<Utc>,
    ) -> ReservationStoreResult<()> {
        self.relink(id, Some(table_id), updated_at)
    }

    async fn detach_table(
        &self,
        id: ReservationId,
        updated_at: DateTime<Utc>,
    ) -> ReservationStoreResult<()> {
        self.relink(id, None, updated_at)
    }
}
