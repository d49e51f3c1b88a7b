//! Persistence Adapters - Per-User File Storage
//!
//! Plain files under a user data root, partitioned by kind and month:
//! bincode blobs for whole instances, headerless CSV for score series,
//! JSON for order lists, and a CSV user registry.
//! No database dependency.

pub mod instance;
pub mod layout;
pub mod orders;
pub mod scores;
pub mod users;

pub use instance::{load_instance, save_instance};
pub use layout::{DataKind, dated_file, month_dir};
pub use orders::{load_order_list, save_order_list};
pub use scores::{load_score_series, save_score_series};
pub use users::{CsvUserRegistry, UserRecord, create_user_folder};
