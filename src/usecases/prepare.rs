//! Prepare - Pending Trading Dates and Exchange Setup
//!
//! Before a user's online trading step runs, work out which trading
//! dates still need processing and build an exchange simulator that
//! covers them:
//!
//! 1. Start from the user's latest trading date, or the date they were
//!    added if they have never traded.
//! 2. Take every trading date from there up to `today`, inclusive.
//! 3. Append the next trading date as a look-ahead day.
//! 4. Build the exchange from the optional parameter file.
//!
//! A latest trading date after `today` short-circuits with a warning.

use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::config::loader::load_exchange_params;
use crate::error::StorageError;
use crate::ports::{ExchangeFactory, ExchangeParams, TradingCalendar, UserRegistry};

/// Outcome of [`prepare`].
#[derive(Debug)]
pub struct Preparation<E> {
  /// Anchor date, the trading dates up to today, then one look-ahead date.
  pub dates: Vec<NaiveDate>,
  /// `None` when the user is already ahead of `today`.
  pub exchange: Option<E>,
}

impl<E> Preparation<E> {
  /// Dates to trade on, without the look-ahead date.
  pub fn pending_dates(&self) -> &[NaiveDate] {
    match self.exchange {
      Some(_) => &self.dates[..self.dates.len().saturating_sub(1)],
      None => self.dates.as_slice(),
    }
  }

  /// The extra trading date past `today`, if one was added.
  pub fn lookahead(&self) -> Option<NaiveDate> {
    self.exchange.as_ref().and(self.dates.last().copied())
  }
}

/// Compute the pending trading dates of `user_id` and set up the exchange.
///
/// # Errors
/// - `StorageError::UnknownUser` if the registry knows no date for the user
/// - `StorageError::EmptyCalendar` if no trading date falls in the window
/// - `StorageError::CalendarExhausted` if the calendar ends before the look-ahead date
/// - exchange parameter file or factory failures
#[instrument(skip(registry, calendar, factory, exchange_config))]
pub fn prepare<R, C, F>(
  registry: &R,
  calendar: &C,
  factory: &F,
  today: NaiveDate,
  user_id: &str,
  exchange_config: Option<&Path>,
) -> Result<Preparation<F::Exchange>>
where
  R: UserRegistry + ?Sized,
  C: TradingCalendar + ?Sized,
  F: ExchangeFactory + ?Sized,
{
  let latest = match registry.latest_trading_date(user_id)? {
    Some(date) => date,
    None => registry
      .add_date(user_id)?
      .ok_or_else(|| StorageError::UnknownUser(user_id.to_string()))?,
  };

  if today < latest {
    warn!(
      user_id,
      last_trading_date = %latest,
      %today,
      "Last trading date is after today"
    );
    return Ok(Preparation {
      dates: vec![latest],
      exchange: None,
    });
  }

  let mut dates = calendar.trading_dates(latest, today)?;
  let Some(&last) = dates.last() else {
    return Err(StorageError::EmptyCalendar {
      start: latest,
      end: today,
    }
    .into());
  };
  let next = calendar
    .next_trading_date(last)?
    .ok_or(StorageError::CalendarExhausted(last))?;
  dates.push(next);

  let params = match exchange_config {
    Some(path) => load_exchange_params(path)?,
    None => ExchangeParams::default(),
  };
  let exchange = factory.build(&dates, params)?;

  info!(
    user_id,
    from = %latest,
    pending = dates.len() - 1,
    lookahead = %next,
    "Trading dates prepared"
  );

  Ok(Preparation {
    dates,
    exchange: Some(exchange),
  })
}
