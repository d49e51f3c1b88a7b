//! Order domain types.
//!
//! An order is a buy/sell instruction for one stock on one trade date.
//! `amount` is the share count already adjusted by `factor`, the
//! per-date price adjustment factor of the stock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lightweight stock identifier (e.g. `SH600000`).
pub type StockId = String;

// ────────────────────────────────────────────
// Direction
// ────────────────────────────────────────────

/// Order direction. Discriminants follow the simulator's encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Sell = 0,
    Buy = 1,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sell => write!(f, "SELL"),
            Self::Buy => write!(f, "BUY"),
        }
    }
}

// ────────────────────────────────────────────
// Order
// ────────────────────────────────────────────

/// A single order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Stock the order trades.
    pub stock_id: StockId,
    /// Buy or sell.
    pub direction: Direction,
    /// Adjusted share amount.
    pub amount: f64,
    /// Adjustment factor on `trade_date`.
    pub factor: f64,
    /// Date the order is meant to execute.
    pub trade_date: NaiveDate,
}

impl Order {
    pub fn new(
        stock_id: impl Into<StockId>,
        direction: Direction,
        amount: f64,
        factor: f64,
        trade_date: NaiveDate,
    ) -> Self {
        Self {
            stock_id: stock_id.into(),
            direction,
            amount,
            factor,
            trade_date,
        }
    }

    pub fn buy(stock_id: impl Into<StockId>, amount: f64, factor: f64, trade_date: NaiveDate) -> Self {
        Self::new(stock_id, Direction::Buy, amount, factor, trade_date)
    }

    pub fn sell(stock_id: impl Into<StockId>, amount: f64, factor: f64, trade_date: NaiveDate) -> Self {
        Self::new(stock_id, Direction::Sell, amount, factor, trade_date)
    }
}
