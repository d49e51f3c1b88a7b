//! Configuration Module - TOML-based Application Configuration
//!
//! Loads and validates configuration from `config.toml`. Paths to the
//! user data root, the trading calendar and the exchange parameter
//! file are externalized here.

pub mod loader;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Identity and logging.
  pub app: AppSection,
  /// User data storage.
  #[serde(default)]
  pub storage: StorageConfig,
  /// Trading calendar source.
  pub calendar: CalendarConfig,
  /// Exchange simulator parameters.
  #[serde(default)]
  pub exchange: ExchangeConfig,
}

/// Application identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable deployment name.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// User data storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
  /// Root folder holding `users.csv` and per-user folders.
  #[serde(default = "default_user_data_dir")]
  pub user_data_dir: String,
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      user_data_dir: default_user_data_dir(),
    }
  }
}

/// Trading calendar configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
  /// Calendar file, one `YYYY-MM-DD` per line.
  pub path: String,
}

/// Exchange simulator configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExchangeConfig {
  /// TOML file with `ExchangeParams`; defaults apply when absent.
  pub config_path: Option<String>,
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_user_data_dir() -> String {
  "user_data".to_string()
}
