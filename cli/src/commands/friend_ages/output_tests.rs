//! Output formatting tests for friend-ages command.

#[cfg(test)]
mod tests {
    use super::super::execute::FriendAgesResult;
    use db::queries::friend_ages::AgedFriend;
    use db::{BirthDate, UserInfo};
    use rstest::{fixture, rstest};

    const NO_FRIENDS_TABLE: &str = "\
Friend ages for user 8

No friends found.";

    const FULL_TABLE: &str = "\
Friend ages for user 1

Oldest:   Carol Jones (3), born 1990-03-20
Youngest: Grace Smith (7), born 1991-??-??";

    #[fixture]
    fn no_friends_result() -> FriendAgesResult {
        FriendAgesResult {
            user_id: 8,
            ..FriendAgesResult::default()
        }
    }

    #[fixture]
    fn full_result() -> FriendAgesResult {
        FriendAgesResult {
            user_id: 1,
            oldest: Some(AgedFriend {
                user: UserInfo::new(3, "Carol", "Jones"),
                birth_date: BirthDate::new(Some(1990), Some(3), Some(20)),
            }),
            youngest: Some(AgedFriend {
                user: UserInfo::new(7, "Grace", "Smith"),
                birth_date: BirthDate::new(Some(1991), None, None),
            }),
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_no_friends,
        fixture: no_friends_result,
        fixture_type: FriendAgesResult,
        expected: NO_FRIENDS_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_full,
        fixture: full_result,
        fixture_type: FriendAgesResult,
        expected: FULL_TABLE,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: full_result,
        fixture_type: FriendAgesResult,
        assertions: {
            "/user_id": 1,
            "/oldest/id": 3,
            "/oldest/birth_date/month": 3,
            "/youngest/birth_date/month": serde_json::Value::Null,
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: full_result,
        fixture_type: FriendAgesResult,
        contains: ["oldest", "youngest", "birth_date"],
    }
}
