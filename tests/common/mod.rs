//! Shared helpers for integration tests.

pub mod simulated;

pub use simulated::{BusError, Call, CountingDelay, SimulatedAds};
