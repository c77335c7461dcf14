//! Service layer for committing a recommended table to a reservation.
//!
//! Assignment is two dependent writes with no spanning transaction:
//!
//! 1. link the reservation to the table;
//! 2. move the table from `available` to `reserved` with an optimistic
//!    status check.
//!
//! A failure in step 2 leaves the link from step 1 in place and is reported
//! as [`AssignmentError::PartialAssignment`]; the caller decides whether to
//! undo it with [`TableAssignmentService::compensate`]. Nothing is retried
//! here.

use crate::table_assignment::{
    domain::{ReservationId, TableId, TableStatus},
    ports::{ReservationStore, ReservationStoreError, TableStore, TableStoreError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Committed link between a reservation and a reserved table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Reservation now holding the table.
    pub reservation_id: ReservationId,
    /// Table now in `reserved` status.
    pub table_id: TableId,
    /// Time both writes completed.
    pub assigned_at: DateTime<Utc>,
}

/// Service-level errors for table assignment.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// Linking the reservation failed; nothing was written.
    #[error(transparent)]
    Reservation(#[from] ReservationStoreError),

    /// The reservation was linked but the table status write failed.
    #[error("reservation {reservation_id} linked to table {table_id} but table was not reserved: {source}")]
    PartialAssignment {
        /// Reservation left pointing at the table.
        reservation_id: ReservationId,
        /// Table whose status did not change.
        table_id: TableId,
        /// Failure of the status write.
        #[source]
        source: TableStoreError,
    },
}

impl AssignmentError {
    /// Returns `true` when another assignment won the race for the table.
    ///
    /// Callers should re-run the recommendation and retry once.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::PartialAssignment {
                source: TableStoreError::Conflict { .. },
                ..
            }
        )
    }

    /// Returns `true` when the reservation or table no longer exists.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Reservation(ReservationStoreError::NotFound(_))
                | Self::PartialAssignment {
                    source: TableStoreError::NotFound(_),
                    ..
                }
        )
    }
}

/// Result type for table assignment operations.
pub type AssignmentResult<T> = Result<T, AssignmentError>;

/// Table assignment orchestration service.
#[derive(Clone)]
pub struct TableAssignmentService<T, R, C>
where
    T: TableStore,
    R: ReservationStore,
    C: Clock + Send + Sync,
{
    tables: Arc<T>,
    reservations: Arc<R>,
    clock: Arc<C>,
}

impl<T, R, C> TableAssignmentService<T, R, C>
where
    T: TableStore,
    R: ReservationStore,
    C: Clock + Send + Sync,
{
    /// Creates a new table assignment service.
    #[must_use]
    pub const fn new(tables: Arc<T>, reservations: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            tables,
            reservations,
            clock,
        }
    }

    /// Links the reservation to the table, then reserves the table.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Reservation`] when the link write fails and
    /// [`AssignmentError::PartialAssignment`] when the status write fails
    /// after the link was made.
    pub async fn assign(
        &self,
        reservation_id: ReservationId,
        table_id: TableId,
    ) -> AssignmentResult<Assignment> {
        let linked_at = self.clock.utc();
        self.reservations
            .attach_table(reservation_id, table_id, linked_at)
            .await?;

        let reserved_at = self.clock.utc();
        if let Err(source) = self
            .tables
            .set_table_status(
                table_id,
                TableStatus::Available,
                TableStatus::Reserved,
                reserved_at,
            )
            .await
        {
            warn!(
                reservation_id = %reservation_id,
                table_id = %table_id,
                error = %source,
                "table status write failed after reservation link"
            );
            return Err(AssignmentError::PartialAssignment {
                reservation_id,
                table_id,
                source,
            });
        }

        info!(
            reservation_id = %reservation_id,
            table_id = %table_id,
            "table assigned"
        );
        Ok(Assignment {
            reservation_id,
            table_id,
            assigned_at: reserved_at,
        })
    }

    /// Undoes the reservation link left behind by a partial assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::Reservation`] when the reservation no
    /// longer exists or the store fails.
    pub async fn compensate(&self, reservation_id: ReservationId) -> AssignmentResult<()> {
        self.reservations
            .detach_table(reservation_id, self.clock.utc())
            .await?;
        warn!(reservation_id = %reservation_id, "reservation table link reverted");
        Ok(())
    }
}
