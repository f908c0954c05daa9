//! Pregnancy handlers for the cycle MCP server

use crate::CycleServerHandler;
use crate::formatting;
use crate::tracker::{self, GestationInput};
use crate::validation;
use mcp_attr::Result as McpResult;

impl CycleServerHandler {
    /// Computes gestational age and remembers it for later pregnancy log entries.
    pub async fn handle_calculate_gestation(
        &self,
        lmp: String,
        today: Option<String>,
    ) -> McpResult<String> {
        if lmp.trim().is_empty() {
            return Ok("No last menstrual period provided; nothing to calculate".to_string());
        }

        let input = GestationInput {
            lmp: validation::parse_date(&lmp, "lmp")?,
        };
        let today = validation::parse_today(today.as_deref())?;

        let prediction = tracker::calculate(&input, today);
        if input.lmp > today {
            tracing::debug!(lmp = %input.lmp, %today, "lmp is in the future, age clamped to zero");
        }
        tracing::debug!(
            weeks = prediction.gestational_age_weeks,
            days = prediction.gestational_age_days,
            due = %prediction.due_date,
            "gestation calculated"
        );

        let text = formatting::format_gestation(&prediction);
        *self.last_gestation.lock().unwrap() = Some(prediction);
        Ok(text)
    }

    /// Looks up one week of the development table.
    pub async fn handle_week_info(&self, week: u32) -> McpResult<String> {
        Ok(formatting::format_week_info(&tracker::lookup_week(week)))
    }
}
