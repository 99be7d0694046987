use crate::backend::{Database, QueryParams, Script};
use crate::db::{extract_users, run_script, DbError};
use crate::types::UserInfo;

const AWAY_FROM_HOME: Script<'static> = Script {
    cozo: r#"
        ?[user_id, first_name, last_name] :=
            *users{user_id, first_name, last_name},
            *user_current_cities{user_id, current_city_id},
            *user_hometown_cities{user_id, hometown_city_id},
            current_city_id != hometown_city_id

        :order user_id
    "#,
    postgres: r#"
        SELECT DISTINCT u.user_id, u.first_name, u.last_name
        FROM users u
        JOIN user_current_cities c ON c.user_id = u.user_id
        JOIN user_hometown_cities h ON h.user_id = u.user_id
        WHERE c.current_city_id <> h.hometown_city_id
        ORDER BY u.user_id
    "#,
};

/// Users whose current city differs from their hometown.
///
/// Users missing either record are left out.
pub fn find_users_away_from_home(db: &dyn Database) -> Result<Vec<UserInfo>, DbError> {
    let result = run_script(db, &AWAY_FROM_HOME, QueryParams::new())?;
    extract_users(result.as_ref())
}
