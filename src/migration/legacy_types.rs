//! Legacy log record types for migration support
//!
//! These structures accept every shape a log record has been stored in.
//! New code should use [`crate::tracker::LogEntry`].

use serde::Deserialize;

/// Entry ID as stored; older clients used numeric timestamps or nothing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LegacyId {
    Number(u64),
    Text(String),
}

impl LegacyId {
    /// The ID as a string, `None` when blank
    pub fn into_string(self) -> Option<String> {
        match self {
            LegacyId::Number(n) => Some(n.to_string()),
            LegacyId::Text(s) if s.trim().is_empty() => None,
            LegacyId::Text(s) => Some(s.trim().to_string()),
        }
    }
}

/// Week as stored: a number, or a string such as `"?"` or `"12"`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LegacyWeek {
    Number(i64),
    Text(String),
}

impl LegacyWeek {
    /// Week number, `None` for the unknown marker or anything unparseable
    pub fn to_week(&self) -> Option<u32> {
        match self {
            LegacyWeek::Number(n) => u32::try_from(*n).ok(),
            LegacyWeek::Text(s) => s.trim().parse::<u32>().ok(),
        }
    }
}

/// A log record in any stored format (legacy, used for migration only)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyLogRecord {
    #[serde(default)]
    pub id: Option<LegacyId>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub week: Option<LegacyWeek>,
    #[serde(default)]
    pub symptom: Option<String>,
    /// Pregnancy journal text, stored under `text` by the first client
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
}
