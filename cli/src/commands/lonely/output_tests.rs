//! Output formatting tests for lonely command.

#[cfg(test)]
mod tests {
    use super::super::execute::LonelyResult;
    use db::UserInfo;
    use rstest::{fixture, rstest};

    const EMPTY_TABLE: &str = "\
Users without friends

Everyone has at least one friend.";

    const SINGLE_TABLE: &str = "\
Users without friends

Found 2 user(s):

ID  FIRST NAME  LAST NAME
-------------------------
8   Bob         Lee
12  Zoe         Quinn";

    #[fixture]
    fn empty_result() -> LonelyResult {
        LonelyResult::default()
    }

    #[fixture]
    fn single_result() -> LonelyResult {
        LonelyResult {
            users: vec![UserInfo::new(8, "Bob", "Lee"), UserInfo::new(12, "Zoe", "Quinn")],
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: LonelyResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_single,
        fixture: single_result,
        fixture_type: LonelyResult,
        expected: SINGLE_TABLE,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: single_result,
        fixture_type: LonelyResult,
        assertions: {
            "/users/0/id": 8,
            "/users/1/last_name": "Quinn",
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: single_result,
        fixture_type: LonelyResult,
        contains: ["users", "Quinn"],
    }
}
