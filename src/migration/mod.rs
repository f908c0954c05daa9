//! Migration of stored log records written by older clients
//!
//! The first version of the trackers ran in a browser and wrote logs to local
//! storage in a looser shape than [`crate::tracker::LogEntry`]:
//!
//! - **Period log**: `{ date, mood, symptom, week }` with no `id`, and `week`
//!   set to the string `"?"` when no prediction had been made
//! - **Pregnancy log**: `{ text, date, week }` where `date` is a US locale
//!   string such as `3/1/2024`
//!
//! Records are read through [`LegacyLogRecord`], which accepts both the old
//! and the current shape, and converted to entries by [`migrate_records`].

mod legacy_types;
mod migrate;
mod normalize;

// Re-export public types and functions
pub use legacy_types::{LegacyId, LegacyLogRecord, LegacyWeek};
pub use migrate::{migrate_record, migrate_records, parse_legacy_date};
pub use normalize::normalize_text_field;
