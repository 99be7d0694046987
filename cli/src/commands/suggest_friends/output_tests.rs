//! Output formatting tests for suggest-friends command.

#[cfg(test)]
mod tests {
    use super::super::execute::SuggestFriendsResult;
    use db::queries::friend_suggestions::FriendSuggestion;
    use db::UserInfo;
    use rstest::{fixture, rstest};

    const EMPTY_TABLE: &str = "\
Friend suggestions (top 5)

No suggestions found.";

    const SINGLE_TABLE: &str = "\
Friend suggestions (top 5)

Alice Smith (1) + Dave Jones (4): 2 mutual friend(s)
  via Bob Smith (2), Carol Jones (3)";

    #[fixture]
    fn empty_result() -> SuggestFriendsResult {
        SuggestFriendsResult {
            num: 5,
            suggestions: vec![],
        }
    }

    #[fixture]
    fn single_result() -> SuggestFriendsResult {
        SuggestFriendsResult {
            num: 5,
            suggestions: vec![FriendSuggestion {
                user1: UserInfo::new(1, "Alice", "Smith"),
                user2: UserInfo::new(4, "Dave", "Jones"),
                mutual_friend_count: 2,
                mutual_friends: vec![
                    UserInfo::new(2, "Bob", "Smith"),
                    UserInfo::new(3, "Carol", "Jones"),
                ],
            }],
        }
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: SuggestFriendsResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_single,
        fixture: single_result,
        fixture_type: SuggestFriendsResult,
        expected: SINGLE_TABLE,
    }

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: single_result,
        fixture_type: SuggestFriendsResult,
        assertions: {
            "/suggestions/0/user1/id": 1,
            "/suggestions/0/user2/id": 4,
            "/suggestions/0/mutual_friend_count": 2,
            "/suggestions/0/mutual_friends/0/first_name": "Bob",
        },
    }

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: single_result,
        fixture_type: SuggestFriendsResult,
        contains: ["suggestions", "mutual_friends"],
    }
}
