//! Score Files - Per-Date Instrument Scores as CSV
//!
//! Files are headerless, one `instrument,score` row per instrument:
//!
//! ```text
//! SH600000,0.0132
//! SZ000001,-0.0071
//! ```

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use tracing::{debug, instrument};

use super::layout::{DataKind, dated_file, month_dir};
use crate::domain::ScoreSeries;
use crate::error::StorageResult;

/// Write `series` to `<user_path>/score/YYYY/MM/score_<date>.csv`.
#[instrument(skip(series, user_path), fields(user = %user_path.as_ref().display(), count = series.len()))]
pub fn save_score_series(
    series: &ScoreSeries,
    user_path: impl AsRef<Path>,
    trade_date: NaiveDate,
) -> StorageResult<()> {
    let user_path = user_path.as_ref();
    fs::create_dir_all(month_dir(user_path, DataKind::Score, trade_date))?;

    let path = dated_file(user_path, DataKind::Score, trade_date);
    let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
    for (instrument, score) in series.iter() {
        writer.write_record([instrument, score.to_string().as_str()])?;
    }
    writer.flush()?;

    debug!(path = %path.display(), "Score series saved");
    Ok(())
}

/// Read the score series saved for `trade_date`.
///
/// The month folder is created when missing; a missing file surfaces
/// as an IO error from the CSV reader.
#[instrument(skip(user_path), fields(user = %user_path.as_ref().display()))]
pub fn load_score_series(
    user_path: impl AsRef<Path>,
    trade_date: NaiveDate,
) -> StorageResult<ScoreSeries> {
    let user_path = user_path.as_ref();
    fs::create_dir_all(month_dir(user_path, DataKind::Score, trade_date))?;

    let path = dated_file(user_path, DataKind::Score, trade_date);
    let mut reader = ReaderBuilder::new().has_headers(false).from_path(&path)?;
    let mut series = ScoreSeries::new();
    for row in reader.deserialize::<(String, f64)>() {
        let (instrument, score) = row?;
        series.insert(instrument, score);
    }

    debug!(path = %path.display(), count = series.len(), "Score series loaded");
    Ok(series)
}
