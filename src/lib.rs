//! qtrade-userdata — Library Root
//!
//! Per-user persistence for simulated online trading: saved instances,
//! the user data folder, per-date score series and order lists, and
//! the pending-trading-date computation that starts each trading step.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod usecases;

pub use error::{StorageError, StorageResult};
