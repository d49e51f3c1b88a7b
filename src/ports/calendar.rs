//! Calendar Port - Trading Day Lookups
//!
//! The calendar decides which calendar dates are trading dates.
//! Lookups are "future-aware": dates past the last observed market
//! data are still answered when the calendar knows them.

use chrono::NaiveDate;

/// Trait for trading calendar providers.
pub trait TradingCalendar {
  /// Trading dates in `[start, end]`, ascending.
  fn trading_dates(
    &self,
    start: NaiveDate,
    end: NaiveDate,
  ) -> anyhow::Result<Vec<NaiveDate>>;

  /// First trading date strictly after `date`, if the calendar has one.
  fn next_trading_date(&self, date: NaiveDate) -> anyhow::Result<Option<NaiveDate>>;
}
