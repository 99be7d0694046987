use serde::Serialize;

use crate::backend::{Database, QueryParams, Script};
use crate::db::{cell_i64, cell_string, run_script, ColumnIndex, DbError};

/// The states hosting the most events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventStateInfo {
    pub event_count: i64,
    /// Alphabetical
    pub states: Vec<String>,
}

const STATE_COUNTS: Script<'static> = Script {
    cozo: r#"
        state_counts[state_name, count(event_id)] :=
            *events{event_id, event_city_id: city_id},
            *cities{city_id, state_name}

        ?[state_name, event_count] := state_counts[state_name, event_count]
    "#,
    postgres: r#"
        SELECT c.state_name, COUNT(*) AS event_count
        FROM events e
        JOIN cities c ON c.city_id = e.event_city_id
        GROUP BY c.state_name
    "#,
};

/// States with the highest number of events, or `None` when there are no events.
pub fn find_event_states(db: &dyn Database) -> Result<Option<EventStateInfo>, DbError> {
    let result = run_script(db, &STATE_COUNTS, QueryParams::new())?;
    let columns = ColumnIndex::from_headers(result.headers());
    let state_idx = columns.index("state_name")?;
    let count_idx = columns.index("event_count")?;

    let counts: Vec<(String, i64)> = result
        .rows()
        .iter()
        .map(|row| (cell_string(row.as_ref(), state_idx), cell_i64(row.as_ref(), count_idx)))
        .collect();

    let Some(event_count) = counts.iter().map(|(_, count)| *count).max() else {
        return Ok(None);
    };
    let mut states: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count == event_count)
        .map(|(state, _)| state)
        .collect();
    states.sort();

    Ok(Some(EventStateInfo { event_count, states }))
}
