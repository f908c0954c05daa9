//! Cycle and pregnancy domain models and calculations
//!
//! This module contains the pure calculation core and the log data structures.
//! It is split into submodules:
//! - `cycle`: Menstrual cycle prediction (next period, ovulation, fertile window)
//! - `gestation`: Gestational age, due date and trimester
//! - `week_table`: Static week-of-development reference data
//! - `symptom_log`: Append-only symptom/mood log shared by both trackers

mod cycle;
mod gestation;
mod symptom_log;
mod week_table;

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Re-export all public types
pub use cycle::{
    CycleInput, CyclePrediction, DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH, LUTEAL_PHASE_DAYS,
    predict,
};
pub use gestation::{
    FULL_TERM_DAYS, GestationInput, GestationPrediction, Trimester, calculate,
};
pub use symptom_log::{LogDraft, LogEntry, SymptomLog};
pub use week_table::{WEEK_COUNT, WeekInfoRow, lookup as lookup_week};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Move `date` by `days`, saturating at the ends of the representable range
pub(crate) fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    match date.checked_add_signed(Duration::days(days)) {
        Some(shifted) => shifted,
        None if days < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}

/// Which tracker a log belongs to
///
/// Each tracker owns exactly one storage slot; the two logs never share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerKind {
    /// Period tracker (mood and symptom log)
    Period,
    /// Pregnancy tracker (symptom journal)
    Pregnancy,
}

impl TrackerKind {
    /// Storage key for this tracker's log
    pub fn storage_key(self) -> &'static str {
        match self {
            TrackerKind::Period => "periodLogs",
            TrackerKind::Pregnancy => "pregnancyLogs",
        }
    }

    /// Human-readable tracker name
    pub fn label(self) -> &'static str {
        match self {
            TrackerKind::Period => "period",
            TrackerKind::Pregnancy => "pregnancy",
        }
    }
}

impl FromStr for TrackerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "period" => Ok(TrackerKind::Period),
            "pregnancy" => Ok(TrackerKind::Pregnancy),
            other => Err(format!(
                "Invalid tracker '{}'. Valid options are: period, pregnancy",
                other
            )),
        }
    }
}
