use serde::Serialize;

use crate::backend::{Database, QueryParams, Script};
use crate::db::{cell_i64, extract_users, run_script, ColumnIndex, DbError};
use crate::types::UserInfo;

/// Distribution of users over birth months
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BirthMonthInfo {
    /// Users with a known birth month
    pub total_users: i64,
    pub most_common_month: Option<i64>,
    pub least_common_month: Option<i64>,
    pub most_common_month_users: Vec<UserInfo>,
    pub least_common_month_users: Vec<UserInfo>,
}

const MONTH_COUNTS: Script<'static> = Script {
    cozo: r#"
        month_counts[month, count(user_id)] :=
            *users{user_id, month_of_birth: month},
            !is_null(month)

        ?[month, user_count] := month_counts[month, user_count]
    "#,
    postgres: r#"
        SELECT month_of_birth AS month, COUNT(*) AS user_count
        FROM users
        WHERE month_of_birth IS NOT NULL
        GROUP BY month_of_birth
    "#,
};

const USERS_IN_MONTH: Script<'static> = Script {
    cozo: r#"
        ?[user_id, first_name, last_name] :=
            *users{user_id, first_name, last_name, month_of_birth},
            month_of_birth == $month

        :order user_id
    "#,
    postgres: r#"
        SELECT user_id, first_name, last_name
        FROM users
        WHERE month_of_birth = $month::BIGINT
        ORDER BY user_id
    "#,
};

/// Pick (most common, least common) from (month, count) pairs.
///
/// Ties go to the smallest month in both directions.
fn extremes(mut counts: Vec<(i64, i64)>) -> Option<(i64, i64)> {
    counts.sort_unstable();
    let (&(first_month, first_count), rest) = counts.split_first()?;

    let (mut most, mut most_count) = (first_month, first_count);
    let (mut least, mut least_count) = (first_month, first_count);
    for &(month, count) in rest {
        if count > most_count {
            most = month;
            most_count = count;
        }
        if count < least_count {
            least = month;
            least_count = count;
        }
    }
    Some((most, least))
}

fn users_in_month(db: &dyn Database, month: i64) -> Result<Vec<UserInfo>, DbError> {
    let params = QueryParams::new().with_int("month", month);
    let result = run_script(db, &USERS_IN_MONTH, params)?;
    extract_users(result.as_ref())
}

/// Most and least common birth months, with the users born in each.
pub fn find_birth_month_info(db: &dyn Database) -> Result<BirthMonthInfo, DbError> {
    let result = run_script(db, &MONTH_COUNTS, QueryParams::new())?;
    let columns = ColumnIndex::from_headers(result.headers());
    let month_idx = columns.index("month")?;
    let count_idx = columns.index("user_count")?;

    let counts: Vec<(i64, i64)> = result
        .rows()
        .iter()
        .map(|row| (cell_i64(row.as_ref(), month_idx), cell_i64(row.as_ref(), count_idx)))
        .filter(|&(_, count)| count > 0)
        .collect();
    let total_users = counts.iter().map(|&(_, count)| count).sum();

    let Some((most, least)) = extremes(counts) else {
        return Ok(BirthMonthInfo::default());
    };

    let most_common_month_users = users_in_month(db, most)?;
    let least_common_month_users = if least == most {
        most_common_month_users.clone()
    } else {
        users_in_month(db, least)?
    };

    Ok(BirthMonthInfo {
        total_users,
        most_common_month: Some(most),
        least_common_month: Some(least),
        most_common_month_users,
        least_common_month_users,
    })
}
