//! File Calendar - One Trading Date per Line
//!
//! Reads a calendar file such as `calendars/day.txt`:
//!
//! ```text
//! 2020-01-02
//! 2020-01-03
//! 2020-01-06
//! ```
//!
//! Blank lines are skipped; dates are sorted and deduplicated on load.

use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;

use crate::error::{StorageResult, parse_date};
use crate::ports::TradingCalendar;

/// In-memory trading calendar loaded from a text file.
#[derive(Debug, Clone)]
pub struct FileCalendar {
    /// Trading dates, ascending and unique.
    dates: Vec<NaiveDate>,
}

impl FileCalendar {
    /// Load a calendar file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read calendar file: {}", path.display()))?;
        let calendar = Self::parse(&content)
            .with_context(|| format!("Failed to parse calendar file: {}", path.display()))?;

        info!(
            path = %path.display(),
            days = calendar.dates.len(),
            first = ?calendar.dates.first(),
            last = ?calendar.dates.last(),
            "Trading calendar loaded"
        );
        Ok(calendar)
    }

    /// Parse calendar text, one `YYYY-MM-DD` per line.
    pub fn parse(content: &str) -> StorageResult<Self> {
        let dates = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(parse_date)
            .collect::<StorageResult<Vec<_>>>()?;
        Ok(Self::from_dates(dates))
    }

    pub fn from_dates(mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }
}

impl TradingCalendar for FileCalendar {
    fn trading_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<NaiveDate>> {
        if end < start {
            return Ok(Vec::new());
        }
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end);
        Ok(self.dates[lo..hi].to_vec())
    }

    fn next_trading_date(&self, date: NaiveDate) -> anyhow::Result<Option<NaiveDate>> {
        let idx = self.dates.partition_point(|d| *d <= date);
        Ok(self.dates.get(idx).copied())
    }
}
