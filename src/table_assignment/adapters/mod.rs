//! Adapter implementations for the table and reservation store ports.

pub mod memory;
pub mod postgres;
