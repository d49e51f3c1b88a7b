//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml` and the exchange parameter file,
//! validating both and reporting misconfiguration clearly.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;
use crate::error::StorageResult;
use crate::ports::ExchangeParams;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| format!("Failed to parse {}", path.display()))?;

  validate_config(&config)?;

  info!(
    name = %config.app.name,
    user_data_dir = %config.storage.user_data_dir,
    calendar = %config.calendar.path,
    "Configuration loaded successfully"
  );

  Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(!config.app.name.is_empty(), "app.name must not be empty");
  anyhow::ensure!(
    LOG_LEVELS.contains(&config.app.log_level.as_str()),
    "app.log_level must be one of {:?}, got {}",
    LOG_LEVELS,
    config.app.log_level
  );
  anyhow::ensure!(
    !config.storage.user_data_dir.is_empty(),
    "storage.user_data_dir must not be empty"
  );
  anyhow::ensure!(
    !config.calendar.path.is_empty(),
    "calendar.path must not be empty"
  );
  if let Some(exchange) = &config.exchange.config_path {
    anyhow::ensure!(
      !exchange.is_empty(),
      "exchange.config_path must not be empty when set"
    );
  }
  Ok(())
}

/// Load exchange simulator parameters from a TOML file.
///
/// Missing keys take their defaults; the result is validated.
pub fn load_exchange_params(path: impl AsRef<Path>) -> StorageResult<ExchangeParams> {
  let path = path.as_ref();
  let content = std::fs::read_to_string(path)?;
  let params: ExchangeParams = toml::from_str(&content)?;
  params.validate()?;

  info!(
    path = %path.display(),
    deal_price = %params.deal_price,
    trade_unit = ?params.trade_unit,
    "Exchange parameters loaded"
  );
  Ok(params)
}
