use super::shift_date;
use super::week_table::{WeekInfoRow, lookup};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a full-term pregnancy counted from the LMP
pub const FULL_TERM_DAYS: i64 = 280;

/// Input for a gestation calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationInput {
    /// First day of the last menstrual period
    pub lmp: NaiveDate,
}

/// Trimester of a pregnancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trimester {
    /// Up to and including week 13
    First,
    /// Weeks 14 through 27
    Second,
    /// Week 28 onward
    Third,
}

impl Trimester {
    /// Trimester for a number of completed weeks
    pub fn from_weeks(weeks: u32) -> Self {
        match weeks {
            0..=13 => Trimester::First,
            14..=27 => Trimester::Second,
            _ => Trimester::Third,
        }
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trimester::First => "1st",
            Trimester::Second => "2nd",
            Trimester::Third => "3rd",
        };
        f.write_str(label)
    }
}

/// Values derived from a [`GestationInput`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationPrediction {
    /// Whole days since the LMP, clamped at zero for future dates
    pub days_pregnant: u32,
    pub gestational_age_weeks: u32,
    /// Remainder days, in `[0, 6]`
    pub gestational_age_days: u32,
    pub due_date: NaiveDate,
    pub trimester: Trimester,
    pub week_info: WeekInfoRow,
}

impl GestationPrediction {
    /// Gestational age as "W weeks, D days"
    pub fn gestational_age(&self) -> String {
        format!(
            "{} weeks, {} days",
            self.gestational_age_weeks, self.gestational_age_days
        )
    }

    /// Whole weeks left until the due date (zero once it has passed)
    pub fn weeks_remaining(&self) -> u32 {
        let total_weeks = (FULL_TERM_DAYS / 7) as u32;
        total_weeks.saturating_sub(self.gestational_age_weeks)
    }
}

/// Calculate gestational age, due date and trimester
///
/// # Arguments
/// * `input` - The last menstrual period
/// * `today` - Reference date
///
/// # Returns
/// The derived prediction; an LMP after `today` counts as zero days pregnant,
/// and a due date past the end of the calendar saturates
pub fn calculate(input: &GestationInput, today: NaiveDate) -> GestationPrediction {
    let days_pregnant = u32::try_from((today - input.lmp).num_days().max(0)).unwrap_or(u32::MAX);
    let weeks = days_pregnant / 7;
    let days = days_pregnant % 7;

    GestationPrediction {
        days_pregnant,
        gestational_age_weeks: weeks,
        gestational_age_days: days,
        due_date: shift_date(input.lmp, FULL_TERM_DAYS),
        trimester: Trimester::from_weeks(weeks),
        week_info: lookup(weeks),
    }
}
