//! Symptom log handlers for the cycle MCP server

use crate::CycleServerHandler;
use crate::formatting;
use crate::tracker::{LogDraft, TrackerKind, local_date_today};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl CycleServerHandler {
    /// Week number stamped on a new entry, from the tracker's last prediction
    fn current_week(&self, kind: TrackerKind) -> Option<u32> {
        match kind {
            TrackerKind::Period => self
                .last_cycle
                .lock()
                .unwrap()
                .as_ref()
                .map(|p| p.cycle_week()),
            TrackerKind::Pregnancy => self
                .last_gestation
                .lock()
                .unwrap()
                .as_ref()
                .map(|p| p.gestational_age_weeks),
        }
    }

    /// Appends an entry to a tracker's log and persists the log.
    pub async fn handle_add_log(
        &self,
        tracker: String,
        symptom: Option<String>,
        mood: Option<String>,
    ) -> McpResult<String> {
        let kind = validation::parse_tracker(&tracker)?;
        let draft = LogDraft {
            symptom: symptom.unwrap_or_default(),
            // The pregnancy journal has no mood field
            mood: if kind == TrackerKind::Period { mood } else { None },
        };
        let week = self.current_week(kind);

        let mut log = self.log_for(kind).lock().unwrap();
        let appended = log
            .append(draft, week, local_date_today())
            .map(|entry| (entry.id.clone(), entry.week_label()));
        let Some((id, week_label)) = appended else {
            drop(log);
            return Ok("Nothing to log: symptom and mood are both empty".to_string());
        };

        if let Err(e) = self.storage.save_log(kind, &log) {
            drop(log);
            tracing::error!(tracker = kind.label(), error = %e, "failed to save log");
            bail_public!(_, "Failed to save: {}", e);
        }
        drop(log);

        tracing::info!(tracker = kind.label(), %id, week = %week_label, "log entry added");
        Ok(format!(
            "Log entry created with ID: {} (tracker: {}, week: {})",
            id,
            kind.label(),
            week_label
        ))
    }

    /// Removes an entry by ID; an unknown ID is reported but not an error.
    pub async fn handle_remove_log(&self, tracker: String, id: String) -> McpResult<String> {
        let kind = validation::parse_tracker(&tracker)?;
        let id = id.trim();

        let mut log = self.log_for(kind).lock().unwrap();
        if log.remove(id).is_none() {
            drop(log);
            return Ok(format!("Log entry '{}' not found; nothing removed", id));
        }

        if let Err(e) = self.storage.save_log(kind, &log) {
            drop(log);
            tracing::error!(tracker = kind.label(), error = %e, "failed to save log");
            bail_public!(_, "Failed to save: {}", e);
        }
        drop(log);

        tracing::info!(tracker = kind.label(), id, "log entry removed");
        Ok(format!("Log entry {} removed", id))
    }

    /// Lists a tracker's log, oldest first.
    pub async fn handle_list_logs(&self, tracker: String) -> McpResult<String> {
        let kind = validation::parse_tracker(&tracker)?;
        let log = self.log_for(kind).lock().unwrap();
        Ok(formatting::format_log(kind, &log))
    }
}
