//! User Folder - Data Root Initialization and CSV Registry
//!
//! The data root holds `users.csv` (`user_id,add_date`) and one
//! sub-folder per user. `CsvUserRegistry` implements the
//! `UserRegistry` port over that layout: add dates come from the CSV,
//! the latest trading date from the newest saved order list.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::layout::{DataKind, USERS_FILE, parse_dated_file_name};
use crate::error::{StorageError, StorageResult};
use crate::ports::UserRegistry;

/// Create the user data root with an empty `users.csv`.
///
/// Does nothing when `path` already exists. Returns whether the folder
/// was created by this call.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn create_user_folder(path: impl AsRef<Path>) -> StorageResult<bool> {
    let path = path.as_ref();
    if path.exists() {
        debug!("User folder already present");
        return Ok(false);
    }

    fs::create_dir_all(path)?;
    write_registry_header(&path.join(USERS_FILE))?;

    info!("User folder created");
    Ok(true)
}

fn write_registry_header(file: &Path) -> StorageResult<()> {
    let mut writer = WriterBuilder::new().from_path(file)?;
    writer.write_record(["user_id", "add_date"])?;
    writer.flush()?;
    Ok(())
}

/// One row of `users.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub add_date: NaiveDate,
}

/// File-backed user registry rooted at a user data folder.
pub struct CsvUserRegistry {
    /// User data root.
    root: PathBuf,
    /// Rows of `users.csv`, in file order.
    records: Vec<UserRecord>,
}

impl CsvUserRegistry {
    /// Open the registry at `root`, initializing the folder if needed.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn open(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        create_user_folder(&root)?;

        let users_file = root.join(USERS_FILE);
        if !users_file.exists() {
            warn!(path = %users_file.display(), "Registry file missing, starting empty");
            write_registry_header(&users_file)?;
        }

        let mut reader = ReaderBuilder::new().from_path(&users_file)?;
        let records = reader
            .deserialize::<UserRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        info!(users = records.len(), "User registry opened");
        Ok(Self { root, records })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Folder holding the score and trade files of `user_id`.
    pub fn user_path(&self, user_id: &str) -> PathBuf {
        self.root.join(user_id)
    }

    pub fn user_ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.user_id.as_str())
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    fn record(&self, user_id: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.user_id == user_id)
    }

    /// Register a new user and create their folder.
    ///
    /// # Errors
    /// `StorageError::DuplicateUser` if `user_id` is already registered.
    #[instrument(skip(self))]
    pub fn add_user(&mut self, user_id: &str, add_date: NaiveDate) -> StorageResult<()> {
        if self.record(user_id).is_some() {
            return Err(StorageError::DuplicateUser(user_id.to_string()));
        }

        let record = UserRecord {
            user_id: user_id.to_string(),
            add_date,
        };
        let file = OpenOptions::new()
            .append(true)
            .open(self.root.join(USERS_FILE))?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.serialize(&record)?;
        writer.flush()?;

        fs::create_dir_all(self.user_path(user_id))?;
        self.records.push(record);

        info!(%add_date, "User added");
        Ok(())
    }

    /// Newest date with a saved order list for `user_id`.
    pub fn last_order_list_date(&self, user_id: &str) -> StorageResult<Option<NaiveDate>> {
        let trade_dir = self.user_path(user_id).join(DataKind::Trade.folder());
        if !trade_dir.is_dir() {
            return Ok(None);
        }

        let mut latest: Option<NaiveDate> = None;
        for year in fs::read_dir(&trade_dir)? {
            let year = year?.path();
            if !year.is_dir() {
                continue;
            }
            for month in fs::read_dir(&year)? {
                let month = month?.path();
                if !month.is_dir() {
                    continue;
                }
                for entry in fs::read_dir(&month)? {
                    let name = entry?.file_name();
                    let date = name
                        .to_str()
                        .and_then(|n| parse_dated_file_name(DataKind::Trade, n));
                    if let Some(date) = date {
                        latest = latest.max(Some(date));
                    }
                }
            }
        }
        Ok(latest)
    }
}

impl UserRegistry for CsvUserRegistry {
    fn latest_trading_date(&self, user_id: &str) -> anyhow::Result<Option<NaiveDate>> {
        Ok(self.last_order_list_date(user_id)?)
    }

    fn add_date(&self, user_id: &str) -> anyhow::Result<Option<NaiveDate>> {
        Ok(self.record(user_id).map(|r| r.add_date))
    }
}
