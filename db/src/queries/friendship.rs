//! Symmetric friendship lookup.
//!
//! Friendship pairs are stored once per unordered pair. Every query that reasons
//! about friendship goes through the fragments here, which expose a `friend`
//! relation holding each pair in both directions.

use crate::backend::{Database, QueryParams, QueryResult, Script};
use crate::db::{extract_users, run_script, DbError};
use crate::types::UserInfo;

/// CozoScript rules defining `friend[a, b]` in both directions.
pub const FRIEND_RULES: &str = r#"
friend[a, b] := *friends{user1_id: a, user2_id: b}
friend[a, b] := *friends{user1_id: b, user2_id: a}
"#;

/// SQL common table expression defining `friend(a, b)` in both directions.
///
/// Meant to follow `WITH`; further CTEs can be appended after a comma.
pub const FRIEND_CTE: &str = r#"
friend AS (
    SELECT user1_id AS a, user2_id AS b FROM friends
    UNION
    SELECT user2_id AS a, user1_id AS b FROM friends
)"#;

/// Order a pair smaller id first. Self pairs have no canonical form.
pub fn canonical_pair(a: i64, b: i64) -> Option<(i64, i64)> {
    match a.cmp(&b) {
        std::cmp::Ordering::Less => Some((a, b)),
        std::cmp::Ordering::Greater => Some((b, a)),
        std::cmp::Ordering::Equal => None,
    }
}

/// True when `a` and `b` are friends, whichever order the pair was stored in.
pub fn are_friends(db: &dyn Database, a: i64, b: i64) -> Result<bool, DbError> {
    let cozo = format!(
        r#"
        {FRIEND_RULES}
        ?[a, b] := friend[a, b], a == $user1, b == $user2
        "#
    );
    let postgres = format!(
        r#"
        WITH {FRIEND_CTE}
        SELECT a, b FROM friend WHERE a = $user1::BIGINT AND b = $user2::BIGINT
        "#
    );
    let params = QueryParams::new().with_int("user1", a).with_int("user2", b);
    let result = run_script(db, &Script { cozo: &cozo, postgres: &postgres }, params)?;
    Ok(!result.rows().is_empty())
}

/// Rows of every friend of `user_id`, ascending by id.
///
/// Columns: `user_id`, `first_name`, `last_name`, `year_of_birth`,
/// `month_of_birth`, `day_of_birth`.
pub(crate) fn friend_rows(db: &dyn Database, user_id: i64) -> Result<Box<dyn QueryResult>, DbError> {
    let cozo = format!(
        r#"
        {FRIEND_RULES}
        ?[user_id, first_name, last_name, year_of_birth, month_of_birth, day_of_birth] :=
            friend[me, user_id],
            me == $user_id,
            *users{{user_id, first_name, last_name, year_of_birth, month_of_birth, day_of_birth}}

        :order user_id
        "#
    );
    let postgres = format!(
        r#"
        WITH {FRIEND_CTE}
        SELECT u.user_id, u.first_name, u.last_name,
               u.year_of_birth, u.month_of_birth, u.day_of_birth
        FROM friend f
        JOIN users u ON u.user_id = f.b
        WHERE f.a = $user_id::BIGINT
        ORDER BY u.user_id
        "#
    );
    let params = QueryParams::new().with_int("user_id", user_id);
    run_script(db, &Script { cozo: &cozo, postgres: &postgres }, params)
}

/// Every friend of `user_id`, ascending by id.
pub fn friends_of(db: &dyn Database, user_id: i64) -> Result<Vec<UserInfo>, DbError> {
    let result = friend_rows(db, user_id)?;
    extract_users(result.as_ref())
}
