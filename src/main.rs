//! qtrade-userdata — Entry Point
//!
//! Prepares the next online trading step for every registered user.
//!
//! Wiring sequence:
//! 1. Load config.toml (path from the first argument) + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Load the trading calendar and open the user registry
//! 4. For each user: compute pending dates, save the exchange session
//!    to `<user>/exchange.bin` for the simulator to pick up

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{error, info};

use qtrade_userdata::adapters::calendar::FileCalendar;
use qtrade_userdata::adapters::exchange::{ExchangeSession, SessionFactory};
use qtrade_userdata::adapters::persistence::{CsvUserRegistry, save_instance};
use qtrade_userdata::config;
use qtrade_userdata::usecases::{Preparation, prepare};

const SESSION_FILE: &str = "exchange.bin";

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Init tracing ─────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.app.log_level)),
        )
        .json()
        .init();

    let today = Local::now().date_naive();
    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        %today,
        "Starting user data preparation"
    );

    // ── 3. Calendar + registry ──────────────────────────────
    let calendar = FileCalendar::load(&config.calendar.path)?;
    let registry = CsvUserRegistry::open(&config.storage.user_data_dir)
        .context("Failed to open user registry")?;
    let exchange_config = config.exchange.config_path.as_deref().map(Path::new);

    // ── 4. Prepare each user ────────────────────────────────
    let failed = prepare_users(&registry, &calendar, today, exchange_config);

    anyhow::ensure!(failed == 0, "{failed} user(s) could not be prepared");
    info!("Preparation complete");
    Ok(())
}

/// Prepare every registered user and save their exchange session.
///
/// A failure is logged and counted without stopping the remaining users.
fn prepare_users(
    registry: &CsvUserRegistry,
    calendar: &FileCalendar,
    today: NaiveDate,
    exchange_config: Option<&Path>,
) -> usize {
    let mut failed = 0usize;
    for user_id in registry.user_ids() {
        match prepare_user(registry, calendar, today, user_id, exchange_config) {
            Ok(prep) => {
                info!(
                    user_id,
                    pending = ?prep.pending_dates(),
                    lookahead = ?prep.lookahead(),
                    "User prepared"
                );
            }
            Err(e) => {
                failed += 1;
                error!(user_id, error = ?e, "Failed to prepare user");
            }
        }
    }
    failed
}

fn prepare_user(
    registry: &CsvUserRegistry,
    calendar: &FileCalendar,
    today: NaiveDate,
    user_id: &str,
    exchange_config: Option<&Path>,
) -> Result<Preparation<ExchangeSession>> {
    let prep = prepare(registry, calendar, &SessionFactory, today, user_id, exchange_config)?;
    if let Some(session) = &prep.exchange {
        let user_path = registry.user_path(user_id);
        std::fs::create_dir_all(&user_path)
            .with_context(|| format!("Failed to create {}", user_path.display()))?;
        save_instance(session, user_path.join(SESSION_FILE))
            .with_context(|| format!("Failed to save session for {user_id}"))?;
    }
    Ok(prep)
}

#[cfg(test)]
mod tests {
    use qtrade_userdata::adapters::persistence::load_instance;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_session_save_failure_does_not_stop_other_users() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = CsvUserRegistry::open(dir.path().join("root")).unwrap();
        registry.add_user("alice", day(2020, 1, 2)).unwrap();
        registry.add_user("bob", day(2020, 1, 2)).unwrap();

        // A plain file where alice's folder should be.
        let alice = registry.user_path("alice");
        std::fs::remove_dir(&alice).unwrap();
        std::fs::write(&alice, b"not a folder").unwrap();

        let calendar = FileCalendar::from_dates(vec![day(2020, 1, 2), day(2020, 1, 3)]);
        let failed = prepare_users(&registry, &calendar, day(2020, 1, 2), None);

        assert_eq!(failed, 1);
        let session: ExchangeSession =
            load_instance(registry.user_path("bob").join(SESSION_FILE)).unwrap();
        assert_eq!(session.trade_dates, vec![day(2020, 1, 2), day(2020, 1, 3)]);
    }
}
