//! Output formatting for event-states command results.

use super::execute::EventStatesResult;
use crate::output::Outputable;

impl Outputable for EventStatesResult {
    fn to_table(&self) -> String {
        let mut lines = vec!["Events by state".to_string(), String::new()];

        match &self.busiest {
            None => lines.push("No events found.".to_string()),
            Some(info) => {
                lines.push(format!(
                    "{} event(s) in each of {} state(s):",
                    info.event_count,
                    info.states.len()
                ));
                for state in &info.states {
                    lines.push(format!("  {}", state));
                }
            }
        }

        lines.join("\n")
    }
}
