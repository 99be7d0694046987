use serde::Serialize;

use crate::backend::{Database, QueryParams, Script};
use crate::db::{cell_i64, extract_users, run_script, ColumnIndex, DbError, UserRowLayout};
use crate::queries::friendship::{FRIEND_CTE, FRIEND_RULES};
use crate::types::UserInfo;

/// Two users who are not friends but share friends. `user1.id < user2.id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FriendSuggestion {
    pub user1: UserInfo,
    pub user2: UserInfo,
    pub mutual_friend_count: i64,
    pub mutual_friends: Vec<UserInfo>,
}

fn mutual_friends(db: &dyn Database, user1: i64, user2: i64) -> Result<Vec<UserInfo>, DbError> {
    let cozo = format!(
        r#"
        {FRIEND_RULES}
        ?[user_id, first_name, last_name] :=
            friend[a, user_id],
            a == $user1,
            friend[user_id, b],
            b == $user2,
            *users{{user_id, first_name, last_name}}

        :order user_id
        "#
    );
    let postgres = format!(
        r#"
        WITH {FRIEND_CTE}
        SELECT DISTINCT u.user_id, u.first_name, u.last_name
        FROM friend f1
        JOIN friend f2 ON f2.a = f1.b
        JOIN users u ON u.user_id = f1.b
        WHERE f1.a = $user1::BIGINT AND f2.b = $user2::BIGINT
        ORDER BY u.user_id
        "#
    );
    let params = QueryParams::new().with_int("user1", user1).with_int("user2", user2);
    let result = run_script(db, &Script { cozo: &cozo, postgres: &postgres }, params)?;
    extract_users(result.as_ref())
}

/// Up to `num` non-friend pairs ranked by how many friends they share.
///
/// Ties are broken by the first user id, then the second.
pub fn find_friend_suggestions(db: &dyn Database, num: u32) -> Result<Vec<FriendSuggestion>, DbError> {
    if num == 0 {
        return Ok(Vec::new());
    }

    let cozo = format!(
        r#"
        {FRIEND_RULES}
        mutual[u1, u2, m] := friend[u1, m], friend[m, u2], u1 < u2

        candidates[u1, u2, count_unique(m)] := mutual[u1, u2, m], not friend[u1, u2]

        ?[user1_id, user1_first_name, user1_last_name,
          user2_id, user2_first_name, user2_last_name, mutual_count] :=
            candidates[user1_id, user2_id, mutual_count],
            *users{{user_id: user1_id, first_name: user1_first_name, last_name: user1_last_name}},
            *users{{user_id: user2_id, first_name: user2_first_name, last_name: user2_last_name}}

        :order -mutual_count, user1_id, user2_id
        :limit {num}
        "#
    );
    let postgres = format!(
        r#"
        WITH {FRIEND_CTE},
        candidates AS (
            SELECT f1.a AS u1, f2.b AS u2, COUNT(DISTINCT f1.b) AS mutual_count
            FROM friend f1
            JOIN friend f2 ON f2.a = f1.b
            WHERE f1.a < f2.b
              AND NOT EXISTS (SELECT 1 FROM friend f WHERE f.a = f1.a AND f.b = f2.b)
            GROUP BY f1.a, f2.b
        )
        SELECT c.u1 AS user1_id, u1.first_name AS user1_first_name, u1.last_name AS user1_last_name,
               c.u2 AS user2_id, u2.first_name AS user2_first_name, u2.last_name AS user2_last_name,
               c.mutual_count
        FROM candidates c
        JOIN users u1 ON u1.user_id = c.u1
        JOIN users u2 ON u2.user_id = c.u2
        ORDER BY c.mutual_count DESC, c.u1, c.u2
        LIMIT {num}
        "#
    );

    let result = run_script(db, &Script { cozo: &cozo, postgres: &postgres }, QueryParams::new())?;
    let columns = ColumnIndex::from_headers(result.headers());
    let first = UserRowLayout::pair_member(&columns, 1)?;
    let second = UserRowLayout::pair_member(&columns, 2)?;
    let count_idx = columns.index("mutual_count")?;

    let mut suggestions = Vec::with_capacity(result.rows().len());
    for row in result.rows() {
        let row = row.as_ref();
        let user1 = first.extract(row)?;
        let user2 = second.extract(row)?;
        let mutual_friends = mutual_friends(db, user1.id, user2.id)?;
        suggestions.push(FriendSuggestion {
            user1,
            user2,
            mutual_friend_count: cell_i64(row, count_idx),
            mutual_friends,
        });
    }

    Ok(suggestions)
}
