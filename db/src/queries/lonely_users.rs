use crate::backend::{Database, QueryParams, Script};
use crate::db::{extract_users, run_script, DbError};
use crate::queries::friendship::{FRIEND_CTE, FRIEND_RULES};
use crate::types::UserInfo;

/// Users with no friendships at all, ascending by id.
pub fn find_lonely_users(db: &dyn Database) -> Result<Vec<UserInfo>, DbError> {
    let cozo = format!(
        r#"
        {FRIEND_RULES}
        has_friend[u] := friend[u, _]

        ?[user_id, first_name, last_name] :=
            *users{{user_id, first_name, last_name}},
            not has_friend[user_id]

        :order user_id
        "#
    );
    let postgres = format!(
        r#"
        WITH {FRIEND_CTE}
        SELECT u.user_id, u.first_name, u.last_name
        FROM users u
        WHERE NOT EXISTS (SELECT 1 FROM friend f WHERE f.a = u.user_id)
        ORDER BY u.user_id
        "#
    );

    let result = run_script(db, &Script { cozo: &cozo, postgres: &postgres }, QueryParams::new())?;
    extract_users(result.as_ref())
}
