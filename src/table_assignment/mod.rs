//! Table recommendation and assignment for Maitre.
//!
//! Given a party size and soft seating preferences, the engine narrows a
//! restaurant's tables to the eligible ones, scores them, picks the best
//! match with up to two runners-up and, on confirmation, reserves the chosen
//! table for a reservation. The module follows hexagonal architecture:
//!
//! - Domain types and pure scoring in [`domain`]
//! - Store contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
