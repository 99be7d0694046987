//! Output formatting tests for event-states command.

#[cfg(test)]
mod tests {
    use super::super::execute::EventStatesResult;
    use db::queries::event_states::EventStateInfo;
    use rstest::{fixture, rstest};

    const EMPTY_TABLE: &str = "\
Events by state

No events found.";

    const TIED_TABLE: &str = "\
Events by state

2 event(s) in each of 2 state(s):
  Illinois
  Michigan";

    #[fixture]
    fn empty_result() -> EventStatesResult {
        EventStatesResult::default()
    }

    #[fixture]
    fn tied_result() -> EventStatesResult {
        EventStatesResult {
            busiest: Some(EventStateInfo {
                event_count: 2,
                states: vec!["Illinois".to_string(), "Michigan".to_string()],
            }),
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: EventStatesResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_tied,
        fixture: tied_result,
        fixture_type: EventStatesResult,
        expected: TIED_TABLE,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: tied_result,
        fixture_type: EventStatesResult,
        assertions: {
            "/busiest/event_count": 2,
            "/busiest/states/1": "Michigan",
        },
    }

    #[rstest]
    fn test_format_json_empty(empty_result: EventStatesResult) {
        use crate::output::{OutputFormat, Outputable};
        let parsed: serde_json::Value =
            serde_json::from_str(&empty_result.format(OutputFormat::Json)).unwrap();
        assert!(parsed["busiest"].is_null());
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: tied_result,
        fixture_type: EventStatesResult,
        contains: ["event_count", "Illinois"],
    }
}
