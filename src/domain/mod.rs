//! Domain layer - records persisted per user and trading date.
//!
//! No file I/O here; adapters decide how these types hit the disk.

pub mod order;
pub mod score;

pub use order::{Direction, Order, StockId};
pub use score::ScoreSeries;
