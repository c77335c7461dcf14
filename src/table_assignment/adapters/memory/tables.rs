//! In-memory table store for tests and embedders without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::table_assignment::{
    domain::{PartySize, RestaurantScope, Table, TableId, TableStatus, filter_eligible},
    ports::{TableStore, TableStoreError, TableStoreResult},
};

/// Thread-safe in-memory table store.
///
/// Tables are listed in insertion order before the capacity sort, mirroring
/// a store's default row order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    state: Arc<RwLock<InMemoryTableState>>,
}

#[derive(Debug, Default)]
struct InMemoryTableState {
    tables: HashMap<TableId, Table>,
    insertion_order: Vec<TableId>,
}

impl InMemoryTableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a table.
    ///
    /// # Errors
    ///
    /// Returns [`TableStoreError::Unavailable`] when the lock is poisoned.
    pub fn insert(&self, table: Table) -> TableStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TableStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        let id = table.id();
        if state.tables.insert(id, table).is_none() {
            state.insertion_order.push(id);
        }
        Ok(())
    }
}

#[async_trait]
impl TableStore for InMemoryTableStore {
    async fn list_eligible_tables(
        &self,
        scope: &RestaurantScope,
        party_size: PartySize,
    ) -> TableStoreResult<Vec<Table>> {
        let state = self
            .state
            .read()
            .map_err(|err| TableStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        let in_scope: Vec<Table> = state
            .insertion_order
            .iter()
            .filter_map(|id| state.tables.get(id))
            .filter(|table| table.scope() == scope)
            .cloned()
            .collect();
        Ok(filter_eligible(in_scope, party_size))
    }

    async fn find_by_id(&self, id: TableId) -> TableStoreResult<Option<Table>> {
        let state = self
            .state
            .read()
            .map_err(|err| TableStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.tables.get(&id).cloned())
    }

    async fn set_table_status(
        &self,
        id: TableId,
        expected: TableStatus,
        status: TableStatus,
        updated_at: DateTime<Utc>,
    ) -> TableStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TableStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        let table = state
            .tables
            .get_mut(&id)
            .ok_or(TableStoreError::NotFound(id))?;
        if table.status() != expected {
            return Err(TableStoreError::Conflict {
                table_id: id,
                expected,
                actual: table.status(),
            });
        }
        table.set_status(status, updated_at);
        Ok(())
    }
}
