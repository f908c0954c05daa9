//! Cycle prediction handler for the cycle MCP server

use crate::CycleServerHandler;
use crate::formatting;
use crate::tracker::{self, CycleInput};
use crate::validation;
use mcp_attr::Result as McpResult;

impl CycleServerHandler {
    /// Computes a cycle prediction and remembers it for later period log entries.
    ///
    /// An empty date skips the computation and leaves the remembered prediction as is.
    pub async fn handle_predict_cycle(
        &self,
        last_period_date: String,
        cycle_length: Option<u32>,
        period_length: Option<u32>,
        today: Option<String>,
    ) -> McpResult<String> {
        if last_period_date.trim().is_empty() {
            return Ok("No last period date provided; nothing to predict".to_string());
        }

        let input = CycleInput {
            last_period_date: validation::parse_date(&last_period_date, "last_period_date")?,
            cycle_length_days: validation::validate_length(
                cycle_length,
                self.config.default_cycle_length,
                "cycle_length",
            )?,
            period_length_days: validation::validate_length(
                period_length,
                self.config.default_period_length,
                "period_length",
            )?,
        };
        let today = validation::parse_today(today.as_deref())?;

        let prediction = tracker::predict(&input, today);
        tracing::debug!(
            last_period = %input.last_period_date,
            cycle_day = prediction.current_cycle_day,
            next_period = %prediction.next_period_date,
            "cycle predicted"
        );

        let text = formatting::format_cycle_prediction(&input, &prediction);
        *self.last_cycle.lock().unwrap() = Some(prediction);
        Ok(text)
    }
}
