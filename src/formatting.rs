//! Formatting helper functions for the cycle MCP server
//!
//! This module renders predictions and logs as the text returned by tools.

use crate::tracker::{
    CycleInput, CyclePrediction, GestationPrediction, SymptomLog, TrackerKind, WeekInfoRow,
};

/// Format a cycle prediction for display
pub fn format_cycle_prediction(input: &CycleInput, prediction: &CyclePrediction) -> String {
    let mut result = format!(
        "Cycle prediction (last period {}, {}-day cycle, {}-day period):\n\n",
        input.last_period_date, input.cycle_length_days, input.period_length_days
    );
    result.push_str(&format!(
        "- Current cycle day: {} (week {})\n",
        prediction.current_cycle_day,
        prediction.cycle_week()
    ));
    result.push_str(&format!("- Period ends: {}\n", prediction.period_end_date));
    result.push_str(&format!("- Next period: {}", prediction.next_period_date));
    match prediction.days_until_next_period {
        d if d > 0 => result.push_str(&format!(" (in {} day(s))\n", d)),
        0 => result.push_str(" (today)\n"),
        d => result.push_str(&format!(" ({} day(s) late)\n", -d)),
    }
    result.push_str(&format!("- Ovulation day: {}\n", prediction.ovulation_date));
    result.push_str(&format!(
        "- Fertile window: {} to {}",
        prediction.fertile_window_start, prediction.fertile_window_end
    ));
    if prediction.in_fertile_window {
        result.push_str(" (currently in fertile window)");
    }
    result.push('\n');
    result
}

/// Format one row of the week-of-development table
pub fn format_week_info(row: &WeekInfoRow) -> String {
    let mut result = format!("{} Week {}\n{}\n", row.emblem, row.week, row.description);
    if !row.approximate_size.is_empty() {
        result.push_str(&format!("Size: {}\n", row.approximate_size));
    }
    if !row.development_note.is_empty() {
        result.push_str(&format!("Development: {}\n", row.development_note));
    }
    result
}

/// Format a gestation prediction for display
pub fn format_gestation(prediction: &GestationPrediction) -> String {
    let mut result = format!(
        "Gestational age: {}\nEstimated due date: {}\nCurrent trimester: {}\n",
        prediction.gestational_age(),
        prediction.due_date,
        prediction.trimester
    );
    result.push_str(&format!(
        "Weeks remaining: {}\n\n",
        prediction.weeks_remaining()
    ));
    result.push_str(&format_week_info(&prediction.week_info));
    result
}

/// Format a tracker's log, oldest entry first
pub fn format_log(kind: TrackerKind, log: &SymptomLog) -> String {
    if log.is_empty() {
        return format!("No {} logs yet", kind.label());
    }

    let mut result = format!("Found {} {} log(s):\n\n", log.len(), kind.label());
    for entry in log.entries() {
        result.push_str(&format!(
            "- [{}] {} Week {}\n",
            entry.id,
            entry.date,
            entry.week_label()
        ));
        if kind == TrackerKind::Period {
            result.push_str(&format!(
                "  Mood: {}\n",
                entry.mood.as_deref().unwrap_or("–")
            ));
        }
        let symptom = if entry.symptom.is_empty() {
            "–"
        } else {
            entry.symptom.as_str()
        };
        result.push_str(&format!("  Symptom: {}\n", symptom));
    }

    result
}
