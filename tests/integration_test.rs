//! Integration Tests - End-to-end User Data Workflows
//!
//! Exercises `prepare` against mocked ports, then runs a full user
//! lifecycle over real files in a temporary data root.

use chrono::NaiveDate;
use mockall::mock;
use mockall::predicate::*;

use qtrade_userdata::StorageError;
use qtrade_userdata::adapters::calendar::FileCalendar;
use qtrade_userdata::adapters::exchange::{ExchangeSession, SessionFactory};
use qtrade_userdata::adapters::persistence::{
    CsvUserRegistry, create_user_folder, load_instance, load_order_list, load_score_series,
    save_instance, save_order_list, save_score_series,
};
use qtrade_userdata::domain::{Direction, Order, ScoreSeries};
use qtrade_userdata::ports::{ExchangeParams, UserRegistry};
use qtrade_userdata::usecases::prepare;

// ---- Mock Definitions ----

mock! {
    pub Registry {}

    impl qtrade_userdata::ports::UserRegistry for Registry {
        fn latest_trading_date(&self, user_id: &str) -> anyhow::Result<Option<NaiveDate>>;
        fn add_date(&self, user_id: &str) -> anyhow::Result<Option<NaiveDate>>;
    }
}

mock! {
    pub Calendar {}

    impl qtrade_userdata::ports::TradingCalendar for Calendar {
        fn trading_dates(&self, start: NaiveDate, end: NaiveDate)
            -> anyhow::Result<Vec<NaiveDate>>;
        fn next_trading_date(&self, date: NaiveDate) -> anyhow::Result<Option<NaiveDate>>;
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---- prepare against mocks ----

#[test]
fn test_prepare_queries_calendar_from_latest_date() {
    let mut registry = MockRegistry::new();
    registry
        .expect_latest_trading_date()
        .with(eq("u1"))
        .returning(|_| Ok(Some(day(2020, 3, 2))));
    registry.expect_add_date().never();

    let mut calendar = MockCalendar::new();
    calendar
        .expect_trading_dates()
        .with(eq(day(2020, 3, 2)), eq(day(2020, 3, 4)))
        .times(1)
        .returning(|_, _| Ok(vec![day(2020, 3, 2), day(2020, 3, 3), day(2020, 3, 4)]));
    calendar
        .expect_next_trading_date()
        .with(eq(day(2020, 3, 4)))
        .times(1)
        .returning(|_| Ok(Some(day(2020, 3, 5))));

    let prep = prepare(&registry, &calendar, &SessionFactory, day(2020, 3, 4), "u1", None).unwrap();
    assert_eq!(
        prep.dates,
        vec![day(2020, 3, 2), day(2020, 3, 3), day(2020, 3, 4), day(2020, 3, 5)]
    );
    let session = prep.exchange.unwrap();
    assert_eq!(session.trade_dates, prep.dates);
    assert_eq!(session.params, ExchangeParams::default());
}

#[test]
fn test_prepare_after_today_skips_calendar() {
    let mut registry = MockRegistry::new();
    registry
        .expect_latest_trading_date()
        .returning(|_| Ok(Some(day(2020, 3, 10))));

    let mut calendar = MockCalendar::new();
    calendar.expect_trading_dates().never();
    calendar.expect_next_trading_date().never();

    let prep = prepare(&registry, &calendar, &SessionFactory, day(2020, 3, 4), "u1", None).unwrap();
    assert_eq!(prep.dates, vec![day(2020, 3, 10)]);
    assert!(prep.exchange.is_none());
}

#[test]
fn test_prepare_propagates_registry_failure() {
    let mut registry = MockRegistry::new();
    registry
        .expect_latest_trading_date()
        .returning(|_| Err(anyhow::anyhow!("registry offline")));
    let calendar = MockCalendar::new();

    let err = prepare(&registry, &calendar, &SessionFactory, day(2020, 3, 4), "u1", None)
        .unwrap_err();
    assert!(err.to_string().contains("registry offline"));
}

#[test]
fn test_prepare_missing_exchange_config() {
    let mut registry = MockRegistry::new();
    registry
        .expect_latest_trading_date()
        .returning(|_| Ok(Some(day(2020, 3, 2))));
    let mut calendar = MockCalendar::new();
    calendar
        .expect_trading_dates()
        .returning(|start, _| Ok(vec![start]));
    calendar
        .expect_next_trading_date()
        .returning(|_| Ok(Some(day(2020, 3, 3))));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("exchange.toml");
    let err = prepare(
        &registry,
        &calendar,
        &SessionFactory,
        day(2020, 3, 2),
        "u1",
        Some(missing.as_path()),
    )
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StorageError>(),
        Some(StorageError::Io(_))
    ));
}

// ---- Full lifecycle over files ----

#[test]
fn test_user_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("user_data");

    assert!(create_user_folder(&root).unwrap());
    assert!(!create_user_folder(&root).unwrap());

    let mut registry = CsvUserRegistry::open(&root).unwrap();
    registry.add_user("alice", day(2020, 1, 2)).unwrap();
    let user = registry.user_path("alice");

    let calendar = FileCalendar::parse(
        "2020-01-02\n2020-01-03\n2020-01-06\n2020-01-07\n2020-01-08\n2020-01-09\n",
    )
    .unwrap();

    // First step: never traded, starts at the add date.
    let prep = prepare(&registry, &calendar, &SessionFactory, day(2020, 1, 3), "alice", None)
        .unwrap();
    assert_eq!(prep.dates, vec![day(2020, 1, 2), day(2020, 1, 3), day(2020, 1, 6)]);

    // Generate scores and orders for each pending date.
    for &date in prep.pending_dates() {
        let mut scores = ScoreSeries::new();
        scores.insert("SH600000", 0.2);
        scores.insert("SZ000001", -0.1);
        save_score_series(&scores, &user, date).unwrap();
        assert_eq!(load_score_series(&user, date).unwrap(), scores);

        let orders = vec![
            Order::buy("SH600000", 100.0, 1.0, date),
            Order::sell("SZ000001", 50.0, 1.1, date),
        ];
        save_order_list(&orders, &user, date).unwrap();
    }

    let loaded = load_order_list(&user, day(2020, 1, 3)).unwrap();
    assert_eq!(loaded[0].direction, Direction::Sell);
    assert_eq!(loaded[1], Order::buy("SH600000", 100.0, 1.0, day(2020, 1, 3)));

    // Session survives a save/load cycle.
    let session = prep.exchange.unwrap();
    let session_path = user.join("exchange.bin");
    save_instance(&session, &session_path).unwrap();
    let restored: ExchangeSession = load_instance(&session_path).unwrap();
    assert_eq!(restored, session);

    // Second step: resumes from the last order list.
    assert_eq!(
        registry.latest_trading_date("alice").unwrap(),
        Some(day(2020, 1, 3))
    );
    let prep = prepare(&registry, &calendar, &SessionFactory, day(2020, 1, 7), "alice", None)
        .unwrap();
    assert_eq!(
        prep.dates,
        vec![day(2020, 1, 3), day(2020, 1, 6), day(2020, 1, 7), day(2020, 1, 8)]
    );

    // No order list yet for the look-ahead date.
    assert!(matches!(
        load_order_list(&user, day(2020, 1, 8)),
        Err(StorageError::NotFound(_))
    ));
}
