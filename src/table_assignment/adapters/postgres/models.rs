//! Diesel row models for seating persistence.

use super::schema::{dining_tables, reservations};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for dining tables.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = dining_tables)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TableRow {
    /// Table identifier.
    pub id: uuid::Uuid,
    /// Owning restaurant.
    pub restaurant_scope: String,
    /// Display name.
    pub name: String,
    /// Seat count.
    pub capacity: i32,
    /// Occupancy status.
    pub status: String,
    /// Optional location tag.
    pub zone: Option<String>,
    /// JSON array of capability tags.
    pub features: Value,
    /// Optional operator tiebreaker weight.
    pub assignment_priority: Option<i32>,
    /// Whether the table is in service.
    pub is_active: bool,
    /// Latest status change timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for reservations.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReservationRow {
    /// Reservation identifier.
    pub id: uuid::Uuid,
    /// Owning restaurant.
    pub restaurant_scope: String,
    /// Number of guests.
    pub party_size: i32,
    /// Linked table, if any.
    pub table_id: Option<uuid::Uuid>,
    /// Latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}
