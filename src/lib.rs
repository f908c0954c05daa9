//! Cycle MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for menstrual cycle
//! and pregnancy tracking. It predicts periods, ovulation and fertile windows,
//! calculates gestational age and due dates, and keeps a symptom log per tracker.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `CycleServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `tracker` module - Pure calculations and log data structures
//! - **Persistence Layer**: `storage` module - Key-value storage of logs as JSON
//!
//! # Example
//!
//! ```no_run
//! use cycle_mcp::{Config, CycleServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = CycleServerHandler::new("cycle-data", Config::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod formatting;
pub mod handlers;
pub mod logging;
pub mod migration;
pub mod storage;
pub mod tracker;
pub mod validation;

use anyhow::{Context, Result};
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::Mutex;

// Re-export commonly used types
pub use config::Config;
pub use storage::{FileStore, KeyValueStore, MemoryStore, Storage};
pub use tracker::{
    CycleInput, CyclePrediction, GestationInput, GestationPrediction, LogDraft, LogEntry,
    SymptomLog, TrackerKind, Trimester, WeekInfoRow,
};

/// MCP Server handler for cycle and pregnancy tracking
///
/// Holds the session state of both trackers: the most recent prediction of
/// each (used to stamp the week on new log entries) and the logs themselves.
/// Logs are persisted through [`Storage`] after every change.
pub struct CycleServerHandler {
    pub(crate) period_log: Mutex<SymptomLog>,
    pub(crate) pregnancy_log: Mutex<SymptomLog>,
    pub(crate) last_cycle: Mutex<Option<CyclePrediction>>,
    pub(crate) last_gestation: Mutex<Option<GestationPrediction>>,
    pub(crate) storage: Storage,
    pub(crate) config: Config,
}

impl CycleServerHandler {
    /// Create a new handler storing logs under `data_dir`
    ///
    /// # Arguments
    /// * `data_dir` - Directory holding one JSON file per tracker log
    /// * `config` - Default lengths and log level
    ///
    /// # Returns
    /// Result containing the handler or an error if the directory cannot be created
    ///
    /// # Example
    /// ```no_run
    /// # use cycle_mcp::{Config, CycleServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = CycleServerHandler::new("cycle-data", Config::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data_dir: impl AsRef<Path>, config: Config) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;
        Ok(Self::with_storage(Storage::in_dir(data_dir), config))
    }

    /// Create a handler on top of an existing storage backend
    pub fn with_storage(storage: Storage, config: Config) -> Self {
        let period_log = Mutex::new(storage.load_log(TrackerKind::Period));
        let pregnancy_log = Mutex::new(storage.load_log(TrackerKind::Pregnancy));
        Self {
            period_log,
            pregnancy_log,
            last_cycle: Mutex::new(None),
            last_gestation: Mutex::new(None),
            storage,
            config,
        }
    }

    /// The in-memory log of a tracker
    pub(crate) fn log_for(&self, kind: TrackerKind) -> &Mutex<SymptomLog> {
        match kind {
            TrackerKind::Period => &self.period_log,
            TrackerKind::Pregnancy => &self.pregnancy_log,
        }
    }

    /// Snapshot of a tracker's log
    pub fn log_snapshot(&self, kind: TrackerKind) -> SymptomLog {
        self.log_for(kind).lock().unwrap().clone()
    }

    /// Most recent cycle prediction of this session, if any
    pub fn last_cycle_prediction(&self) -> Option<CyclePrediction> {
        self.last_cycle.lock().unwrap().clone()
    }

    /// Most recent gestation prediction of this session, if any
    pub fn last_gestation_prediction(&self) -> Option<GestationPrediction> {
        self.last_gestation.lock().unwrap().clone()
    }
}

/// Menstrual cycle and pregnancy tracker.
///
/// Two trackers share this server:
/// - **period**: predict the next period, ovulation day and fertile window from the
///   first day of the last period; keep a mood and symptom log
/// - **pregnancy**: calculate gestational age, due date and trimester from the last
///   menstrual period (LMP); keep a symptom journal
///
/// Log entries are stamped with the week from the tracker's most recent prediction
/// (cycle week for period, gestational week for pregnancy), or `?` if none was made.
/// Dates use YYYY-MM-DD.
#[mcp_server]
impl McpServer for CycleServerHandler {
    /// **Predict cycle**: next period, ovulation day, fertile window and current cycle day.
    /// **Workflow**: call before add_log(tracker="period") so entries get a cycle week.
    #[tool]
    async fn predict_cycle(
        &self,
        /// First day of the last period, YYYY-MM-DD
        last_period_date: String,
        /// Cycle length in days (default 28)
        cycle_length: Option<u32>,
        /// Period length in days (default 5)
        period_length: Option<u32>,
        /// Reference date YYYY-MM-DD (default: today)
        today: Option<String>,
    ) -> McpResult<String> {
        self.handle_predict_cycle(last_period_date, cycle_length, period_length, today)
            .await
    }

    /// **Pregnancy progress**: gestational age, due date (LMP + 280 days), trimester and
    /// this week's development. **Workflow**: call before add_log(tracker="pregnancy").
    #[tool]
    async fn calculate_gestation(
        &self,
        /// First day of the last menstrual period, YYYY-MM-DD
        lmp: String,
        /// Reference date YYYY-MM-DD (default: today)
        today: Option<String>,
    ) -> McpResult<String> {
        self.handle_calculate_gestation(lmp, today).await
    }

    /// **Week of development**: baby size and development notes for a pregnancy week (1-40).
    #[tool]
    async fn week_info(
        &self,
        /// Gestational week
        week: u32,
    ) -> McpResult<String> {
        self.handle_week_info(week).await
    }

    /// **Log symptoms**: add an entry to the period or pregnancy log.
    /// At least one of symptom/mood must be non-empty. Mood applies to the period log only.
    #[tool]
    async fn add_log(
        &self,
        /// Tracker: period/pregnancy
        tracker: String,
        /// Symptom text (e.g., "cramps", "morning sickness")
        symptom: Option<String>,
        /// Mood text, period tracker only (e.g., "happy", "moody")
        mood: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_log(tracker, symptom, mood).await
    }

    /// **Delete log entry**: remove one entry by ID. Unknown IDs are ignored.
    #[tool]
    async fn remove_log(
        &self,
        /// Tracker: period/pregnancy
        tracker: String,
        /// Entry ID as shown by list_logs
        id: String,
    ) -> McpResult<String> {
        self.handle_remove_log(tracker, id).await
    }

    /// **Review log**: list all entries of a tracker, oldest first.
    #[tool]
    async fn list_logs(
        &self,
        /// Tracker: period/pregnancy
        tracker: String,
    ) -> McpResult<String> {
        self.handle_list_logs(tracker).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn get_test_handler() -> (CycleServerHandler, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let handler = CycleServerHandler::new(temp_dir.path(), Config::default()).unwrap();
        (handler, temp_dir)
    }

    /// Extract ID from an add_log response
    /// Response format: "Log entry created with ID: <id> (tracker: ..., week: ...)"
    fn extract_id_from_response(response: &str) -> String {
        let start = response.find("ID: ").unwrap() + 4;
        let rest = &response[start..];
        rest[..rest.find(" (").unwrap()].trim().to_string()
    }

    #[tokio::test]
    async fn test_predict_cycle_scenario() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_predict_cycle(
                "2024-01-01".to_string(),
                Some(28),
                None,
                Some("2024-01-03".to_string()),
            )
            .await
            .unwrap();

        assert!(result.contains("Next period: 2024-01-29"));
        assert!(result.contains("Ovulation day: 2024-01-15"));
        assert!(result.contains("Fertile window: 2024-01-13 to 2024-01-17"));

        let prediction = handler.last_cycle_prediction().unwrap();
        assert_eq!(prediction.current_cycle_day, 3);
    }

    #[tokio::test]
    async fn test_empty_date_skips_prediction() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_predict_cycle("  ".to_string(), None, None, None)
            .await
            .unwrap();
        assert!(result.contains("nothing to predict"));
        assert!(handler.last_cycle_prediction().is_none());
    }

    #[tokio::test]
    async fn test_invalid_cycle_parameters() {
        let (handler, _temp_dir) = get_test_handler();

        let bad_date = handler
            .handle_predict_cycle("2024/01/01".to_string(), None, None, None)
            .await;
        assert!(bad_date.is_err());

        let zero_cycle = handler
            .handle_predict_cycle("2024-01-01".to_string(), Some(0), None, None)
            .await;
        assert!(zero_cycle.is_err());
        assert!(handler.last_cycle_prediction().is_none());
    }

    #[tokio::test]
    async fn test_config_default_cycle_length() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            default_cycle_length: 30,
            ..Config::default()
        };
        let handler = CycleServerHandler::new(temp_dir.path(), config).unwrap();

        let result = handler
            .handle_predict_cycle(
                "2024-01-01".to_string(),
                None,
                None,
                Some("2024-01-02".to_string()),
            )
            .await
            .unwrap();
        assert!(result.contains("30-day cycle"));
        assert!(result.contains("Next period: 2024-01-31"));
    }

    #[tokio::test]
    async fn test_add_log_without_prediction_has_unknown_week() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_add_log(
                "period".to_string(),
                Some("cramps".to_string()),
                Some(String::new()),
            )
            .await
            .unwrap();
        assert!(result.contains("week: ?"));

        let log = handler.log_snapshot(TrackerKind::Period);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].week, None);
        assert_eq!(log.entries()[0].symptom, "cramps");
    }

    #[tokio::test]
    async fn test_add_log_uses_cycle_week() {
        let (handler, _temp_dir) = get_test_handler();

        // Day 10 of the cycle is in week 2
        handler
            .handle_predict_cycle(
                "2024-01-01".to_string(),
                None,
                None,
                Some("2024-01-10".to_string()),
            )
            .await
            .unwrap();
        handler
            .handle_add_log("period".to_string(), None, Some("moody".to_string()))
            .await
            .unwrap();

        let log = handler.log_snapshot(TrackerKind::Period);
        assert_eq!(log.entries()[0].week, Some(2));
        assert_eq!(log.entries()[0].mood.as_deref(), Some("moody"));
    }

    #[tokio::test]
    async fn test_pregnancy_log_uses_gestational_week_and_drops_mood() {
        let (handler, _temp_dir) = get_test_handler();

        handler
            .handle_calculate_gestation("2024-01-01".to_string(), Some("2024-03-01".to_string()))
            .await
            .unwrap();
        handler
            .handle_add_log(
                "pregnancy".to_string(),
                Some("morning sickness".to_string()),
                Some("happy".to_string()),
            )
            .await
            .unwrap();

        let log = handler.log_snapshot(TrackerKind::Pregnancy);
        assert_eq!(log.entries()[0].week, Some(8));
        assert_eq!(log.entries()[0].mood, None);
        // The period log is untouched
        assert!(handler.log_snapshot(TrackerKind::Period).is_empty());
    }

    #[tokio::test]
    async fn test_blank_log_is_rejected() {
        let (handler, _temp_dir) = get_test_handler();

        let result = handler
            .handle_add_log("period".to_string(), Some(" ".to_string()), None)
            .await
            .unwrap();
        assert!(result.contains("Nothing to log"));
        assert!(handler.log_snapshot(TrackerKind::Period).is_empty());
    }

    #[tokio::test]
    async fn test_remove_log_and_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let handler = CycleServerHandler::new(temp_dir.path(), Config::default()).unwrap();

        handler
            .handle_add_log("period".to_string(), Some("headache".to_string()), None)
            .await
            .unwrap();
        let response = handler
            .handle_add_log("period".to_string(), Some("fatigue".to_string()), None)
            .await
            .unwrap();
        let id = extract_id_from_response(&response);

        let removed = handler
            .handle_remove_log("period".to_string(), id.clone())
            .await
            .unwrap();
        assert!(removed.contains("removed"));

        let again = handler
            .handle_remove_log("period".to_string(), id)
            .await
            .unwrap();
        assert!(again.contains("not found"));

        // A new handler on the same directory sees the persisted log
        let reopened = CycleServerHandler::new(temp_dir.path(), Config::default()).unwrap();
        let log = reopened.log_snapshot(TrackerKind::Period);
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].symptom, "headache");
    }

    #[tokio::test]
    async fn test_unknown_tracker_is_error() {
        let (handler, _temp_dir) = get_test_handler();
        assert!(handler.handle_list_logs("sleep".to_string()).await.is_err());
    }

    #[tokio::test]
    async fn test_list_logs() {
        let (handler, _temp_dir) = get_test_handler();

        let empty = handler
            .handle_list_logs("pregnancy".to_string())
            .await
            .unwrap();
        assert_eq!(empty, "No pregnancy logs yet");

        handler
            .handle_add_log("pregnancy".to_string(), Some("backache".to_string()), None)
            .await
            .unwrap();
        let list = handler
            .handle_list_logs("pregnancy".to_string())
            .await
            .unwrap();
        assert!(list.contains("Found 1 pregnancy log(s)"));
        assert!(list.contains("Symptom: backache"));
    }
}
