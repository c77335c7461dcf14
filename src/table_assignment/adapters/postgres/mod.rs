//! `PostgreSQL` adapters for the table and reservation stores.

mod models;
mod repository;
mod schema;

pub use repository::{PostgresReservationStore, PostgresTableStore, SeatingPgPool};
