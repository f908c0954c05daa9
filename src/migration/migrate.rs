//! Conversion of stored records into current log entries

use super::legacy_types::{LegacyId, LegacyLogRecord, LegacyWeek};
use super::normalize::normalize_text_field;
use crate::tracker::{LogEntry, SymptomLog};
use chrono::NaiveDate;

/// Parse a stored date in ISO (`2024-03-01`) or US locale (`3/1/2024`) form
pub fn parse_legacy_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
        .ok()
}

/// The record as an entry, if it is already in the current shape
///
/// A current record has a text ID, an ISO date, a numeric or null week and a
/// `symptom` field.
fn current_entry(record: &LegacyLogRecord) -> Option<LogEntry> {
    let Some(LegacyId::Text(id)) = &record.id else {
        return None;
    };
    if id.trim().is_empty() || record.text.is_some() {
        return None;
    }

    let date = NaiveDate::parse_from_str(record.date.as_deref()?, "%Y-%m-%d").ok()?;
    let week = match &record.week {
        None => None,
        Some(LegacyWeek::Number(n)) => Some(u32::try_from(*n).ok()?),
        Some(LegacyWeek::Text(_)) => return None,
    };

    Some(LogEntry {
        id: id.clone(),
        date,
        week,
        symptom: record.symptom.clone()?,
        mood: record.mood.clone(),
    })
}

/// Convert one stored record into a log entry
///
/// Records already in the current shape are kept exactly as stored.
///
/// # Arguments
///
/// * `record` - Record in any stored format
/// * `today` - Date used when the stored date cannot be parsed
///
/// # Returns
///
/// The entry, and whether anything had to change to produce it
pub fn migrate_record(record: LegacyLogRecord, today: NaiveDate) -> (LogEntry, bool) {
    if let Some(entry) = current_entry(&record) {
        return (entry, false);
    }
    let mut changed = false;

    let id = match record.id.and_then(|id| id.into_string()) {
        Some(id) => id,
        None => {
            changed = true;
            LogEntry::generate_id()
        }
    };

    let raw_date = record.date.unwrap_or_default();
    let date = match NaiveDate::parse_from_str(raw_date.trim(), "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            changed = true;
            parse_legacy_date(&raw_date).unwrap_or(today)
        }
    };

    if matches!(record.week, Some(LegacyWeek::Text(_))) {
        changed = true;
    }
    let week = record.week.as_ref().and_then(LegacyWeek::to_week);

    let raw_symptom = match (record.symptom, record.text) {
        (Some(symptom), _) => symptom,
        (None, Some(text)) => {
            changed = true;
            text
        }
        (None, None) => String::new(),
    };
    let symptom = normalize_text_field(&raw_symptom);
    changed |= symptom != raw_symptom;

    let mood = match record.mood {
        Some(raw) => {
            let normalized = normalize_text_field(&raw);
            if normalized != raw || normalized.is_empty() {
                changed = true;
            }
            Some(normalized).filter(|m| !m.is_empty())
        }
        None => None,
    };

    (
        LogEntry {
            id,
            date,
            week,
            symptom,
            mood,
        },
        changed,
    )
}

/// Convert stored records into a log, preserving their order
///
/// # Returns
///
/// The log and the number of records that needed migration
pub fn migrate_records(records: Vec<LegacyLogRecord>, today: NaiveDate) -> (SymptomLog, usize) {
    let mut migrated = 0;
    let entries = records
        .into_iter()
        .map(|record| {
            let (entry, changed) = migrate_record(record, today);
            if changed {
                migrated += 1;
            }
            entry
        })
        .collect();

    (SymptomLog::from_entries(entries), migrated)
}
