use crate::migration::normalize_text_field;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Freeform text submitted for a new log entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogDraft {
    pub symptom: String,
    /// Only the period tracker asks for a mood
    pub mood: Option<String>,
}

impl LogDraft {
    /// True when every text field is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.symptom.trim().is_empty()
            && self.mood.as_deref().is_none_or(|m| m.trim().is_empty())
    }
}

/// A single observation in a symptom log
///
/// Entries are never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Time-ordered unique identifier
    pub id: String,
    /// Date the entry was recorded
    pub date: NaiveDate,
    /// Cycle or gestation week at entry time; `None` when no prediction existed
    pub week: Option<u32>,
    #[serde(default)]
    pub symptom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl LogEntry {
    /// Generate a fresh time-ordered entry ID
    pub fn generate_id() -> String {
        Uuid::now_v7().to_string()
    }

    /// Week for display, `?` when unknown
    pub fn week_label(&self) -> String {
        self.week
            .map(|w| w.to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// Append-only log of observations, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomLog {
    entries: Vec<LogEntry>,
}

impl SymptomLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from already-ordered entries
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        Self { entries }
    }

    /// Append a new entry built from `draft`
    ///
    /// # Arguments
    /// * `draft` - Freeform text fields
    /// * `week` - Week snapshot from the last prediction, if any
    /// * `today` - Date stamped on the entry
    ///
    /// # Returns
    /// The new entry, or `None` when every text field was blank
    pub fn append(
        &mut self,
        draft: LogDraft,
        week: Option<u32>,
        today: NaiveDate,
    ) -> Option<&LogEntry> {
        if draft.is_blank() {
            return None;
        }

        let mood = draft
            .mood
            .map(|m| normalize_text_field(&m))
            .filter(|m| !m.is_empty());
        self.entries.push(LogEntry {
            id: LogEntry::generate_id(),
            date: today,
            week,
            symptom: normalize_text_field(&draft.symptom),
            mood,
        });
        self.entries.last()
    }

    /// Remove the entry with the given ID
    ///
    /// # Returns
    /// The removed entry if found; an unknown ID leaves the log unchanged
    pub fn remove(&mut self, id: &str) -> Option<LogEntry> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Find an entry by ID
    pub fn find(&self, id: &str) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
