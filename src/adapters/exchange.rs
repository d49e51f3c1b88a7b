//! Exchange Session - Serializable Simulator Setup
//!
//! The simulator runs elsewhere. This adapter captures what it needs
//! (trade dates plus parameters) as a value that can be saved with
//! `save_instance` and handed over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ports::{ExchangeFactory, ExchangeParams};

/// Everything needed to start an exchange simulator for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeSession {
    pub trade_dates: Vec<NaiveDate>,
    pub params: ExchangeParams,
}

/// Factory producing [`ExchangeSession`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionFactory;

impl ExchangeFactory for SessionFactory {
    type Exchange = ExchangeSession;

    fn build(
        &self,
        trade_dates: &[NaiveDate],
        params: ExchangeParams,
    ) -> anyhow::Result<ExchangeSession> {
        anyhow::ensure!(!trade_dates.is_empty(), "Exchange needs at least one trade date");
        Ok(ExchangeSession {
            trade_dates: trade_dates.to_vec(),
            params,
        })
    }
}
