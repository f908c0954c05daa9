use super::shift_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cycle length used when the caller does not supply one
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// Period length used when the caller does not supply one
pub const DEFAULT_PERIOD_LENGTH: u32 = 5;

/// Days between ovulation and the start of the next period
pub const LUTEAL_PHASE_DAYS: u32 = 14;

/// Days on each side of ovulation included in the fertile window
const FERTILE_MARGIN_DAYS: i64 = 2;

/// Input for a cycle prediction
///
/// Both lengths must be positive; the tool layer rejects zero before
/// building this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleInput {
    /// First day of the most recent period
    pub last_period_date: NaiveDate,
    /// Length of the whole cycle in days
    pub cycle_length_days: u32,
    /// Length of bleeding in days
    pub period_length_days: u32,
}

impl CycleInput {
    /// Create an input with the default cycle and period lengths
    pub fn new(last_period_date: NaiveDate) -> Self {
        Self {
            last_period_date,
            cycle_length_days: DEFAULT_CYCLE_LENGTH,
            period_length_days: DEFAULT_PERIOD_LENGTH,
        }
    }
}

/// Dates derived from a [`CycleInput`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePrediction {
    pub next_period_date: NaiveDate,
    pub ovulation_date: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
    /// Last day of the current period (inclusive)
    pub period_end_date: NaiveDate,
    /// 1-based day within the cycle, always in `[1, cycle_length_days]`
    pub current_cycle_day: u32,
    /// Negative when the next period is overdue
    pub days_until_next_period: i64,
    pub in_fertile_window: bool,
}

impl CyclePrediction {
    /// Week of the cycle that `current_cycle_day` falls in (1-based)
    ///
    /// This is the week number stamped onto period log entries.
    pub fn cycle_week(&self) -> u32 {
        self.current_cycle_day.div_ceil(7)
    }
}

/// Predict the next period, ovulation and fertile window
///
/// # Arguments
/// * `input` - Last period date and cycle/period lengths
/// * `today` - Reference date for the current cycle day
///
/// # Returns
/// The derived prediction. The function is pure: identical inputs always
/// give identical output. Dates past the ends of the calendar saturate
/// instead of overflowing.
pub fn predict(input: &CycleInput, today: NaiveDate) -> CyclePrediction {
    let cycle_length = i64::from(input.cycle_length_days.max(1));
    let start = input.last_period_date;

    let next_period_date = shift_date(start, cycle_length);

    // Short cycles would put ovulation before the period started
    let ovulation_offset = (cycle_length - i64::from(LUTEAL_PHASE_DAYS)).max(0);
    let ovulation_date = shift_date(start, ovulation_offset);

    let fertile_window_start = shift_date(ovulation_date, -FERTILE_MARGIN_DAYS);
    let fertile_window_end = shift_date(ovulation_date, FERTILE_MARGIN_DAYS);

    let period_length = i64::from(input.period_length_days.max(1));
    let period_end_date = shift_date(start, period_length - 1);

    let elapsed = (today - start).num_days();
    let current_cycle_day = (elapsed.rem_euclid(cycle_length) + 1) as u32;

    CyclePrediction {
        next_period_date,
        ovulation_date,
        fertile_window_start,
        fertile_window_end,
        period_end_date,
        current_cycle_day,
        days_until_next_period: (next_period_date - today).num_days(),
        in_fertile_window: (fertile_window_start..=fertile_window_end).contains(&today),
    }
}
