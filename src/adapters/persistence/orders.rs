//! Order List Files - Per-Date Orders as JSON
//!
//! Orders are grouped by direction and keyed by stock id:
//!
//! ```json
//! {"sell": {"SH600000": [200.0, 1.02]}, "buy": {"SZ000001": [100.0, 0.98]}}
//! ```
//!
//! Each value is `[amount, factor]`. Within a group, stocks keep the
//! order they were saved in. The trade date is carried by the file
//! name only.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::layout::{DataKind, dated_file, month_dir};
use crate::domain::{Direction, Order, StockId};
use crate::error::{StorageError, StorageResult};

/// On-disk shape of an order list file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct OrderListFile {
    sell: IndexMap<StockId, (f64, f64)>,
    buy: IndexMap<StockId, (f64, f64)>,
}

impl OrderListFile {
    /// Group `orders` by direction. JSON has no encoding for NaN or
    /// infinity, so non-finite amounts and factors are rejected.
    fn from_orders(orders: &[Order]) -> StorageResult<Self> {
        let mut file = Self::default();
        for order in orders {
            for (field, value) in [("amount", order.amount), ("factor", order.factor)] {
                if !value.is_finite() {
                    return Err(StorageError::InvalidOrder {
                        stock_id: order.stock_id.clone(),
                        reason: format!("{field} must be finite, got {value}"),
                    });
                }
            }
            let group = match order.direction {
                Direction::Sell => &mut file.sell,
                Direction::Buy => &mut file.buy,
            };
            if group
                .insert(order.stock_id.clone(), (order.amount, order.factor))
                .is_some()
            {
                warn!(
                    stock_id = %order.stock_id,
                    direction = %order.direction,
                    "Duplicate order in list, keeping the last one"
                );
            }
        }
        Ok(file)
    }

    fn into_orders(self, trade_date: NaiveDate) -> Vec<Order> {
        let sells = self.sell.into_iter().map(|(id, (amount, factor))| {
            Order::new(id, Direction::Sell, amount, factor, trade_date)
        });
        let buys = self.buy.into_iter().map(|(id, (amount, factor))| {
            Order::new(id, Direction::Buy, amount, factor, trade_date)
        });
        sells.chain(buys).collect()
    }
}

/// Write `orders` to `<user_path>/trade/YYYY/MM/orderlist_<date>.json`.
///
/// Two orders for the same stock and direction collapse into the last
/// one, at the position of the first.
///
/// # Errors
/// `StorageError::InvalidOrder` if an amount or factor is not finite;
/// nothing is written in that case.
#[instrument(skip(orders, user_path), fields(user = %user_path.as_ref().display(), count = orders.len()))]
pub fn save_order_list(
    orders: &[Order],
    user_path: impl AsRef<Path>,
    trade_date: NaiveDate,
) -> StorageResult<()> {
    let file = OrderListFile::from_orders(orders)?;
    let user_path = user_path.as_ref();
    fs::create_dir_all(month_dir(user_path, DataKind::Trade, trade_date))?;

    let path = dated_file(user_path, DataKind::Trade, trade_date);
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer(&mut writer, &file)?;
    writer.flush()?;

    debug!(path = %path.display(), "Order list saved");
    Ok(())
}

/// Read the order list saved for `trade_date`: sells first, then buys.
///
/// # Errors
/// `StorageError::NotFound` if no order list exists for that date.
#[instrument(skip(user_path), fields(user = %user_path.as_ref().display()))]
pub fn load_order_list(
    user_path: impl AsRef<Path>,
    trade_date: NaiveDate,
) -> StorageResult<Vec<Order>> {
    let path = dated_file(user_path.as_ref(), DataKind::Trade, trade_date);
    if !path.exists() {
        return Err(StorageError::NotFound(path));
    }

    let file: OrderListFile = serde_json::from_reader(BufReader::new(File::open(&path)?))?;
    let orders = file.into_orders(trade_date);

    debug!(path = %path.display(), count = orders.len(), "Order list loaded");
    Ok(orders)
}
