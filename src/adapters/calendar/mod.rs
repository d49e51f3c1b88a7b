//! Calendar Adapters - Trading Calendars Backed by Local Files

pub mod file;

pub use file::FileCalendar;
