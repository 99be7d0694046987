//! Execute tests for birth-months command.

#[cfg(all(test, feature = "backend-cozo"))]
mod tests {
    use super::super::BirthMonthsCmd;
    use db::queries::birth_months::BirthMonthInfo;
    use rstest::{fixture, rstest};

    crate::execute_test_fixture! {
        fixture_name: populated_db,
    }

    crate::execute_test! {
        test_name: test_birth_months,
        fixture: populated_db,
        cmd: BirthMonthsCmd {},
        assertions: |result| {
            assert_eq!(result.total_users, 7);
            assert_eq!(result.most_common_month, Some(3));
            assert_eq!(result.least_common_month, Some(5));
            let most: Vec<i64> = result.most_common_month_users.iter().map(|u| u.id).collect();
            assert_eq!(most, vec![1, 3]);
            let least: Vec<i64> = result.least_common_month_users.iter().map(|u| u.id).collect();
            assert_eq!(least, vec![9]);
        },
    }

    crate::execute_no_data_test! {
        cmd: BirthMonthsCmd {},
        assertions: |result| {
            assert_eq!(result, BirthMonthInfo::default());
        },
    }

    crate::execute_empty_db_test! {
        cmd_type: BirthMonthsCmd,
        cmd: BirthMonthsCmd {},
    }
}
