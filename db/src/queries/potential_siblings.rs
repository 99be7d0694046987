use serde::Serialize;

use crate::backend::{Database, QueryParams, Script};
use crate::db::{run_script, ColumnIndex, DbError, UserRowLayout};
use crate::queries::friendship::{FRIEND_CTE, FRIEND_RULES};
use crate::types::UserInfo;

/// Two friends who could be siblings. `user1.id < user2.id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiblingPair {
    pub user1: UserInfo,
    pub user2: UserInfo,
}

/// Maximum birth-year gap (exclusive) between potential siblings.
pub const MAX_SIBLING_YEAR_GAP: i64 = 10;

/// Friends sharing a last name and hometown, born less than ten years apart.
pub fn find_potential_siblings(db: &dyn Database) -> Result<Vec<SiblingPair>, DbError> {
    let cozo = format!(
        r#"
        {FRIEND_RULES}
        born[u, last_name, year] :=
            *users{{user_id: u, last_name, year_of_birth: year}},
            !is_null(year)

        ?[user1_id, user1_first_name, user1_last_name,
          user2_id, user2_first_name, user2_last_name] :=
            friend[user1_id, user2_id],
            user1_id < user2_id,
            born[user1_id, last_name, y1],
            born[user2_id, last_name, y2],
            abs(y1 - y2) < $max_gap,
            *user_hometown_cities{{user_id: user1_id, hometown_city_id: city}},
            *user_hometown_cities{{user_id: user2_id, hometown_city_id: city}},
            *users{{user_id: user1_id, first_name: user1_first_name, last_name: user1_last_name}},
            *users{{user_id: user2_id, first_name: user2_first_name, last_name: user2_last_name}}

        :order user1_id, user2_id
        "#
    );
    let postgres = format!(
        r#"
        WITH {FRIEND_CTE}
        SELECT u1.user_id AS user1_id, u1.first_name AS user1_first_name, u1.last_name AS user1_last_name,
               u2.user_id AS user2_id, u2.first_name AS user2_first_name, u2.last_name AS user2_last_name
        FROM friend f
        JOIN users u1 ON u1.user_id = f.a
        JOIN users u2 ON u2.user_id = f.b
        JOIN user_hometown_cities h1 ON h1.user_id = u1.user_id
        JOIN user_hometown_cities h2 ON h2.user_id = u2.user_id
        WHERE f.a < f.b
          AND u1.last_name = u2.last_name
          AND h1.hometown_city_id = h2.hometown_city_id
          AND u1.year_of_birth IS NOT NULL
          AND u2.year_of_birth IS NOT NULL
          AND ABS(u1.year_of_birth - u2.year_of_birth) < $max_gap::BIGINT
        ORDER BY u1.user_id, u2.user_id
        "#
    );

    let params = QueryParams::new().with_int("max_gap", MAX_SIBLING_YEAR_GAP);
    let result = run_script(db, &Script { cozo: &cozo, postgres: &postgres }, params)?;
    let columns = ColumnIndex::from_headers(result.headers());
    let first = UserRowLayout::pair_member(&columns, 1)?;
    let second = UserRowLayout::pair_member(&columns, 2)?;

    result
        .rows()
        .iter()
        .map(|row| {
            Ok(SiblingPair {
                user1: first.extract(row.as_ref())?,
                user2: second.extract(row.as_ref())?,
            })
        })
        .collect()
}
