//! Infrastructure implementations.
//!
//! Port traits plus their system, seeded and environment-backed adapters.

pub mod clock;
pub mod ports;
pub mod settings;
