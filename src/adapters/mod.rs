//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! file I/O, plus the per-date storage helpers used by the online
//! trading loop.
//!
//! Adapter categories:
//! - `calendar`: trading calendar read from a local file
//! - `exchange`: serializable exchange simulator setup
//! - `persistence`: instances, user folder, scores, order lists

pub mod calendar;
pub mod exchange;
pub mod persistence;
