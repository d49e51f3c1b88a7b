//! User Registry Port - Per-User Trading State
//!
//! The user manager owns accounts and strategies; this crate only
//! needs to know where each user's trading history starts and ends.

use chrono::NaiveDate;

/// Trait for user registry providers.
pub trait UserRegistry {
  /// Date of the user's most recent trade, `None` if never traded.
  fn latest_trading_date(&self, user_id: &str) -> anyhow::Result<Option<NaiveDate>>;

  /// Date the user was registered, `None` if unknown.
  fn add_date(&self, user_id: &str) -> anyhow::Result<Option<NaiveDate>>;
}
