//! Storage Errors
//!
//! Typed failures raised by the persistence adapters and `prepare`.
//! Ports and the binary wrap these in `anyhow` where context matters
//! more than the variant.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while reading or writing user data.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A file that must exist before loading is absent.
    #[error("Cannot find file {0}")]
    NotFound(PathBuf),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Order list JSON could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Score or registry CSV could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Binary instance encoding failed.
    #[error("Encoding error: {0}")]
    Encode(#[from] bincode::Error),

    /// Exchange parameter file is not valid TOML.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Neither a latest trading date nor an add date is known for the user.
    #[error("Unknown user {0}")]
    UnknownUser(String),

    /// The registry already contains the user.
    #[error("User {0} already registered")]
    DuplicateUser(String),

    /// The calendar has no trading date in the requested window.
    #[error("No trading dates between {start} and {end}")]
    EmptyCalendar { start: NaiveDate, end: NaiveDate },

    /// The calendar has no trading date after the given one.
    #[error("No trading date after {0}")]
    CalendarExhausted(NaiveDate),

    /// A date string did not parse as `YYYY-MM-DD`.
    #[error("Invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    /// An order cannot be written to an order list file.
    #[error("Invalid order for {stock_id}: {reason}")]
    InvalidOrder { stock_id: String, reason: String },

    /// A configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Shorthand result for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Parse a `YYYY-MM-DD` string into a date.
pub fn parse_date(value: &str) -> StorageResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
        StorageError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}
