//! Exchange Port - Simulator Construction Interface
//!
//! The exchange simulator itself lives outside this crate. `prepare`
//! hands it the pending trade dates plus the parameters read from
//! the user's exchange config file.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};

/// Construction parameters for the exchange simulator.
///
/// Every field has a default so a partial TOML file (or none at all)
/// yields a usable simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangeParams {
  /// Tradable universe: `"all"` or a named instrument pool.
  pub codes: String,
  /// Price field used for fills (e.g. `close`, `vwap`).
  pub deal_price: String,
  /// Daily limit-up/down threshold; `None` disables the check.
  pub limit_threshold: Option<f64>,
  /// Proportional cost on buys.
  pub open_cost: f64,
  /// Proportional cost on sells.
  pub close_cost: f64,
  /// Minimum absolute cost per trade.
  pub min_cost: f64,
  /// Lot size; `None` allows fractional amounts.
  pub trade_unit: Option<f64>,
  /// Optional file of extra quotes merged into market data.
  pub extra_quote: Option<PathBuf>,
}

impl Default for ExchangeParams {
  fn default() -> Self {
    Self {
      codes: "all".to_string(),
      deal_price: "close".to_string(),
      limit_threshold: None,
      open_cost: 0.0015,
      close_cost: 0.0025,
      min_cost: 5.0,
      trade_unit: None,
      extra_quote: None,
    }
  }
}

impl ExchangeParams {
  /// Reject negative costs and non-positive lot sizes.
  pub fn validate(&self) -> StorageResult<()> {
    for (name, value) in [
      ("open_cost", self.open_cost),
      ("close_cost", self.close_cost),
      ("min_cost", self.min_cost),
    ] {
      if value < 0.0 || !value.is_finite() {
        return Err(StorageError::InvalidConfig(format!(
          "{name} must be a non-negative number, got {value}"
        )));
      }
    }
    if let Some(unit) = self.trade_unit {
      if unit <= 0.0 {
        return Err(StorageError::InvalidConfig(format!(
          "trade_unit must be positive, got {unit}"
        )));
      }
    }
    if let Some(threshold) = self.limit_threshold {
      if threshold <= 0.0 {
        return Err(StorageError::InvalidConfig(format!(
          "limit_threshold must be positive, got {threshold}"
        )));
      }
    }
    Ok(())
  }
}

/// Trait for exchange simulator constructors.
pub trait ExchangeFactory {
  /// Simulator handle produced by the factory.
  type Exchange;

  /// Build a simulator covering `trade_dates`.
  fn build(
    &self,
    trade_dates: &[NaiveDate],
    params: ExchangeParams,
  ) -> anyhow::Result<Self::Exchange>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_validate() {
    assert!(ExchangeParams::default().validate().is_ok());
  }

  #[test]
  fn test_partial_toml_fills_defaults() {
    let params: ExchangeParams =
      toml::from_str("deal_price = \"vwap\"\ntrade_unit = 100.0\n").unwrap();
    assert_eq!(params.deal_price, "vwap");
    assert_eq!(params.trade_unit, Some(100.0));
    assert_eq!(params.codes, "all");
    assert!((params.min_cost - 5.0).abs() < f64::EPSILON);
  }

  #[test]
  fn test_negative_cost_rejected() {
    let params = ExchangeParams {
      open_cost: -0.1,
      ..ExchangeParams::default()
    };
    assert!(matches!(params.validate(), Err(StorageError::InvalidConfig(_))));
  }

  #[test]
  fn test_zero_trade_unit_rejected() {
    let params = ExchangeParams {
      trade_unit: Some(0.0),
      ..ExchangeParams::default()
    };
    assert!(params.validate().is_err());
  }
}
