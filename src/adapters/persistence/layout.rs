//! Path Layout - Date-Partitioned User Files
//!
//! Every per-date file lives at
//! `<user_path>/<kind>/YYYY/MM/<prefix>_YYYY-MM-DD.<ext>`. This module
//! is the only place those paths are built.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// Name of the user registry file at the data root.
pub const USERS_FILE: &str = "users.csv";

/// Kind of per-date user file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKind {
    /// Model scores: `score/YYYY/MM/score_<date>.csv`.
    Score,
    /// Order lists: `trade/YYYY/MM/orderlist_<date>.json`.
    Trade,
}

impl DataKind {
    /// Top-level folder name under the user path.
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Trade => "trade",
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Trade => "orderlist",
        }
    }

    const fn extension(self) -> &'static str {
        match self {
            Self::Score => "csv",
            Self::Trade => "json",
        }
    }
}

/// `YYYY-MM-DD` form used in file names.
pub fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Month folder holding `kind` files for `date`.
pub fn month_dir(user_path: &Path, kind: DataKind, date: NaiveDate) -> PathBuf {
    user_path
        .join(kind.folder())
        .join(date.format("%Y").to_string())
        .join(date.format("%m").to_string())
}

/// Full path of the `kind` file for `date`.
pub fn dated_file(user_path: &Path, kind: DataKind, date: NaiveDate) -> PathBuf {
    month_dir(user_path, kind, date).join(format!(
        "{}_{}.{}",
        kind.prefix(),
        date_string(date),
        kind.extension()
    ))
}

/// Recover the date from a file name produced by [`dated_file`].
pub fn parse_dated_file_name(kind: DataKind, file_name: &str) -> Option<NaiveDate> {
    let stem = file_name
        .strip_prefix(kind.prefix())?
        .strip_prefix('_')?
        .strip_suffix(kind.extension())?
        .strip_suffix('.')?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}
