//! Ports Layer - Collaborator Boundaries
//!
//! Defines the interfaces this crate requires from the wider trading
//! framework. Adapters implement these traits; `prepare` only knows
//! about the traits.
//!
//! Port categories:
//! - `TradingCalendar`: trading-day lookups
//! - `UserRegistry`: per-user add date and latest trading date
//! - `ExchangeFactory`: builds an exchange simulator for a date window

pub mod calendar;
pub mod exchange;
pub mod users;

pub use calendar::TradingCalendar;
pub use exchange::{ExchangeFactory, ExchangeParams};
pub use users::UserRegistry;
