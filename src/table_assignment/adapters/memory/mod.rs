//! In-memory adapters for table and reservation stores.

mod reservations;
mod tables;

pub use reservations::InMemoryReservationStore;
pub use tables::InMemoryTableStore;
