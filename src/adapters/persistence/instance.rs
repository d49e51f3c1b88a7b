//! Instance Store - Opaque Binary Snapshots
//!
//! Saves any serde-serializable value (user managers, models, account
//! snapshots) as a bincode blob and loads it back.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{StorageError, StorageResult};

/// Load an instance previously written by [`save_instance`].
///
/// # Errors
/// `StorageError::NotFound` if `path` does not exist; decode errors
/// if the file holds something else.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_instance<T: DeserializeOwned>(path: impl AsRef<Path>) -> StorageResult<T> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(path)?);
    let instance = bincode::deserialize_from(reader)?;
    debug!("Instance loaded");
    Ok(instance)
}

/// Save an instance to `path`, replacing any existing file.
///
/// The parent directory must already exist.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn save_instance<T: Serialize>(instance: &T, path: impl AsRef<Path>) -> StorageResult<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    bincode::serialize_into(&mut writer, instance)?;
    writer.flush()?;
    debug!("Instance saved");
    Ok(())
}
