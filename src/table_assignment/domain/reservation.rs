//! Reservation record as far as table linking is concerned.

use super::{PartySize, ReservationId, RestaurantScope, TableId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Reservation awaiting or holding a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    scope: RestaurantScope,
    party_size: PartySize,
    table_id: Option<TableId>,
    updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a reservation without a linked table.
    #[must_use]
    pub fn new(scope: RestaurantScope, party_size: PartySize, clock: &impl Clock) -> Self {
        Self {
            id: ReservationId::new(),
            scope,
            party_size,
            table_id: None,
            updated_at: clock.utc(),
        }
    }

    /// Reconstructs a reservation from persisted storage.
    #[must_use]
    pub const fn from_persisted(
        id: ReservationId,
        scope: RestaurantScope,
        party_size: PartySize,
        table_id: Option<TableId>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            scope,
            party_size,
            table_id,
            updated_at,
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the owning restaurant.
    #[must_use]
    pub const fn scope(&self) -> &RestaurantScope {
        &self.scope
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn party_size(&self) -> PartySize {
        self.party_size
    }

    /// Returns the linked table, if any.
    #[must_use]
    pub const fn table_id(&self) -> Option<TableId> {
        self.table_id
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Links or unlinks a table.
    pub const fn set_table(&mut self, table_id: Option<TableId>, at: DateTime<Utc>) {
        self.table_id = table_id;
        self.updated_at = at;
    }
}
