//! Diesel mappings for the externally owned seating relations.

diesel::table! {
    /// Dining tables, one row per physical table.
    dining_tables (id) {
        /// Table identifier.
        id -> Uuid,
        /// Owning restaurant.
        #[max_length = 255]
        restaurant_scope -> Varchar,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Seat count.
        capacity -> Int4,
        /// Occupancy status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional location tag.
        #[max_length = 255]
        zone -> Nullable<Varchar>,
        /// JSON array of capability tags.
        features -> Jsonb,
        /// Optional operator tiebreaker weight.
        assignment_priority -> Nullable<Int4>,
        /// Whether the table is in service.
        is_active -> Bool,
        /// Latest status change timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Reservations that may hold a table.
    reservations (id) {
        /// Reservation identifier.
        id -> Uuid,
        /// Owning restaurant.
        #[max_length = 255]
        restaurant_scope -> Varchar,
        /// Number of guests.
        party_size -> Int4,
        /// Linked table, if any.
        table_id -> Nullable<Uuid>,
        /// Latest modification timestamp.
        updated_at -> Timestamptz,
    }
}
