//! Use Cases Layer - Workflows over the ports.
//!
//! - `prepare`: pending trading dates and exchange setup for a user

pub mod prepare;

pub use prepare::{Preparation, prepare};
