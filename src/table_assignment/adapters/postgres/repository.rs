//! `PostgreSQL` store implementations for table recommendation and
//! assignment.

use super::{
    models::{ReservationRow, TableRow},
    schema::{dining_tables, reservations},
};
use crate::table_assignment::{
    domain::{
        PartySize, PersistedTableData, Reservation, ReservationId, RestaurantScope, Table,
        TableId, TableStatus,
    },
    ports::{
        ReservationStore, ReservationStoreError, ReservationStoreResult, TableStore,
        TableStoreError, TableStoreResult,
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use std::collections::BTreeSet;

/// `PostgreSQL` connection pool type used by seating adapters.
pub type SeatingPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed table store.
#[derive(Debug, Clone)]
pub struct PostgresTableStore {
    pool: SeatingPgPool,
}

impl PostgresTableStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: SeatingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TableStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TableStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TableStoreError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(TableStoreError::unavailable)?
    }
}

#[async_trait]
impl TableStore for PostgresTableStore {
    async fn list_eligible_tables(
        &self,
        scope: &RestaurantScope,
        party_size: PartySize,
    ) -> TableStoreResult<Vec<Table>> {
        // No stored capacity can exceed `i32::MAX`.
        let Ok(min_capacity) = i32::try_from(party_size.value()) else {
            return Ok(Vec::new());
        };
        let scope_value = scope.as_str().to_owned();

        self.run_blocking(move |connection| {
            let rows = dining_tables::table
                .filter(dining_tables::restaurant_scope.eq(scope_value))
                .filter(dining_tables::is_active.eq(true))
                .filter(dining_tables::status.eq(TableStatus::Available.as_str()))
                .filter(dining_tables::capacity.ge(min_capacity))
                .order(dining_tables::capacity.asc())
                .select(TableRow::as_select())
                .load::<TableRow>(connection)
                .map_err(TableStoreError::unavailable)?;
            rows.into_iter().map(row_to_table).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TableId) -> TableStoreResult<Option<Table>> {
        self.run_blocking(move |connection| {
            let row = dining_tables::table
                .filter(dining_tables::id.eq(id.into_inner()))
                .select(TableRow::as_select())
                .first::<TableRow>(connection)
                .optional()
                .map_err(TableStoreError::unavailable)?;
            row.map(row_to_table).transpose()
        })
        .await
    }

    async fn set_table_status(
        &self,
        id: TableId,
        expected: TableStatus,
        status: TableStatus,
        updated_at: DateTime<Utc>,
    ) -> TableStoreResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                dining_tables::table
                    .filter(dining_tables::id.eq(id.into_inner()))
                    .filter(dining_tables::status.eq(expected.as_str())),
            )
            .set((
                dining_tables::status.eq(status.as_str()),
                dining_tables::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(TableStoreError::unavailable)?;
            if updated > 0 {
                return Ok(());
            }

            // Zero rows means either the table is gone or another writer
            // moved it first.
            let current = dining_tables::table
                .filter(dining_tables::id.eq(id.into_inner()))
                .select(dining_tables::status)
                .first::<String>(connection)
                .optional()
                .map_err(TableStoreError::unavailable)?;
            match current {
                None => Err(TableStoreError::NotFound(id)),
                Some(raw) => {
                    let actual = TableStatus::try_from(raw.as_str())
                        .map_err(TableStoreError::invalid_persisted_data)?;
                    Err(TableStoreError::Conflict {
                        table_id: id,
                        expected,
                        actual,
                    })
                }
            }
        })
        .await
    }
}

/// `PostgreSQL`-backed reservation store.
#[derive(Debug, Clone)]
pub struct PostgresReservationStore {
    pool: SeatingPgPool,
}

impl PostgresReservationStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: SeatingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ReservationStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ReservationStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ReservationStoreError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(ReservationStoreError::unavailable)?
    }

    async fn relink(
        &self,
        id: ReservationId,
        table_id: Option<TableId>,
        updated_at: DateTime<Utc>,
    ) -> ReservationStoreResult<()> {
        self.run_blocking(move |connection| {
            let updated = diesel::update(
                reservations::table.filter(reservations::id.eq(id.into_inner())),
            )
            .set((
                reservations::table_id.eq(table_id.map(TableId::into_inner)),
                reservations::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(ReservationStoreError::unavailable)?;
            if updated == 0 {
                return Err(ReservationStoreError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl ReservationStore for PostgresReservationStore {
    async fn find_by_id(&self, id: ReservationId) -> ReservationStoreResult<Option<Reservation>> {
        self.run_blocking(move |connection| {
            let row = reservations::table
                .filter(reservations::id.eq(id.into_inner()))
                .select(ReservationRow::as_select())
                .first::<ReservationRow>(connection)
                .optional()
                .map_err(ReservationStoreError::unavailable)?;
            row.map(row_to_reservation).transpose()
        })
        .await
    }

    async fn attach_table(
        &self,
        id: ReservationId,
        table_id: TableId,
        updated_at: DateTime<Utc>,
    ) -> ReservationStoreResult<()> {
        self.relink(id, Some(table_id), updated_at).await
    }

    async fn detach_table(
        &self,
        id: ReservationId,
        updated_at: DateTime<Utc>,
    ) -> ReservationStoreResult<()> {
        self.relink(id, None, updated_at).await
    }
}

fn row_to_table(row: TableRow) -> TableStoreResult<Table> {
    let TableRow {
        id,
        restaurant_scope,
        name,
        capacity: persisted_capacity,
        status: persisted_status,
        zone,
        features: persisted_features,
        assignment_priority: persisted_priority,
        is_active,
        updated_at,
    } = row;

    let scope =
        RestaurantScope::new(restaurant_scope).map_err(TableStoreError::invalid_persisted_data)?;
    let capacity =
        u32::try_from(persisted_capacity).map_err(TableStoreError::invalid_persisted_data)?;
    let status = TableStatus::try_from(persisted_status.as_str())
        .map_err(TableStoreError::invalid_persisted_data)?;
    let features = serde_json::from_value::<BTreeSet<String>>(persisted_features)
        .map_err(TableStoreError::invalid_persisted_data)?;
    let assignment_priority = persisted_priority
        .map(u32::try_from)
        .transpose()
        .map_err(TableStoreError::invalid_persisted_data)?;

    Table::from_persisted(PersistedTableData {
        id: TableId::from_uuid(id),
        scope,
        name,
        capacity,
        status,
        zone,
        features,
        assignment_priority,
        is_active,
        updated_at,
    })
    .map_err(TableStoreError::invalid_persisted_data)
}

fn row_to_reservation(row: ReservationRow) -> ReservationStoreResult<Reservation> {
    let scope = RestaurantScope::new(row.restaurant_scope)
        .map_err(ReservationStoreError::invalid_persisted_data)?;
    let party_size = PartySize::new(i64::from(row.party_size))
        .map_err(ReservationStoreError::invalid_persisted_data)?;
    Ok(Reservation::from_persisted(
        ReservationId::from_uuid(row.id),
        scope,
        party_size,
        row.table_id.map(TableId::from_uuid),
        row.updated_at,
    ))
}
