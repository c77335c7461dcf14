//! Maitre: table recommendation and assignment for restaurant point of sale.
//!
//! This crate decides which dining table to offer a party and commits that
//! choice to a reservation. Storage is external; the engine reads and writes
//! through store ports.
//!
//! # Architecture
//!
//! Maitre follows hexagonal architecture principles:
//!
//! - **Domain**: Eligibility, scoring and selection with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the table and reservation stores
//! - **Adapters**: In-memory and `PostgreSQL` store implementations
//!
//! # Modules
//!
//! - [`table_assignment`]: Table recommendation and assignment

pub mod table_assignment;
