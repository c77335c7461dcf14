//! Port contracts for table recommendation and assignment.
//!
//! The table and reservation stores are externally owned; the engine only
//! reads and writes through these interfaces.

pub mod reservation_store;
pub mod table_store;

pub use reservation_store::{ReservationStore, ReservationStoreError, ReservationStoreResult};
pub use table_store::{TableStore, TableStoreError, TableStoreResult};

#[cfg(test)]
pub use reservation_store::MockReservationStore;
#[cfg(test)]
pub use table_store::MockTableStore;
