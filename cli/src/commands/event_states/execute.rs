use std::error::Error;

use db::queries::event_states::{find_event_states, EventStateInfo};
use db::Database;
use serde::Serialize;

use super::EventStatesCmd;
use crate::commands::Execute;

/// Result of the event-states command execution
#[derive(Debug, Default, Serialize)]
pub struct EventStatesResult {
    /// `None` when no events are stored
    pub busiest: Option<EventStateInfo>,
}

impl Execute for EventStatesCmd {
    type Output = EventStatesResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(EventStatesResult {
            busiest: find_event_states(db)?,
        })
    }
}
