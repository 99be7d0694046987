use serde::Serialize;

use crate::backend::Database;
use crate::db::{cell_opt_i64, ColumnIndex, DbError, UserRowLayout};
use crate::queries::friendship::friend_rows;
use crate::types::{BirthDate, UserInfo};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgedFriend {
    #[serde(flatten)]
    pub user: UserInfo,
    pub birth_date: BirthDate,
}

/// Oldest and youngest friend of a user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FriendAgeInfo {
    pub oldest: AgedFriend,
    pub youngest: AgedFriend,
}

/// Oldest and youngest friend of `user_id`, or `None` when they have no friends.
///
/// Friends are ordered by birth date, unknown components last, then by id.
pub fn find_friend_ages(db: &dyn Database, user_id: i64) -> Result<Option<FriendAgeInfo>, DbError> {
    let result = friend_rows(db, user_id)?;
    let columns = ColumnIndex::from_headers(result.headers());
    let layout = UserRowLayout::single(&columns)?;
    let year_idx = columns.index("year_of_birth")?;
    let month_idx = columns.index("month_of_birth")?;
    let day_idx = columns.index("day_of_birth")?;

    let mut friends = result
        .rows()
        .iter()
        .map(|row| {
            let row = row.as_ref();
            Ok(AgedFriend {
                user: layout.extract(row)?,
                birth_date: BirthDate::new(
                    cell_opt_i64(row, year_idx),
                    cell_opt_i64(row, month_idx),
                    cell_opt_i64(row, day_idx),
                ),
            })
        })
        .collect::<Result<Vec<_>, DbError>>()?;
    friends.sort_by(|a, b| {
        a.birth_date
            .cmp(&b.birth_date)
            .then_with(|| a.user.id.cmp(&b.user.id))
    });

    let (Some(oldest), Some(youngest)) = (friends.first(), friends.last()) else {
        return Ok(None);
    };
    Ok(Some(FriendAgeInfo {
        oldest: oldest.clone(),
        youngest: youngest.clone(),
    }))
}
