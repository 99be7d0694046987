//! Match-maker: pairs of same-gender users who are not friends, are close in
//! age, and appear together in photos.

use serde::Serialize;

use crate::backend::{Database, QueryParams, Script};
use crate::db::{cell_i64, run_script, ColumnIndex, DbError, UserRowLayout};
use crate::queries::friendship::{FRIEND_CTE, FRIEND_RULES};
use crate::queries::tagged_photos::PhotoRowLayout;
use crate::types::{PhotoInfo, UserInfo};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedUser {
    #[serde(flatten)]
    pub user: UserInfo,
    pub year_of_birth: i64,
}

/// A candidate match. `user1.user.id < user2.user.id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchPair {
    pub user1: MatchedUser,
    pub user2: MatchedUser,
    pub shared_photo_count: i64,
    pub shared_photos: Vec<PhotoInfo>,
}

const SHARED_PHOTOS: Script<'static> = Script {
    cozo: r#"
        ?[photo_id, album_id, photo_link, album_name] :=
            *tags{tag_photo_id: photo_id, tag_subject_id: a},
            a == $user1,
            *tags{tag_photo_id: photo_id, tag_subject_id: b},
            b == $user2,
            *photos{photo_id, album_id, photo_link},
            *albums{album_id, album_name}

        :order photo_id
    "#,
    postgres: r#"
        SELECT DISTINCT p.photo_id, p.album_id, p.photo_link, a.album_name
        FROM tags t1
        JOIN tags t2 ON t2.tag_photo_id = t1.tag_photo_id
        JOIN photos p ON p.photo_id = t1.tag_photo_id
        JOIN albums a ON a.album_id = p.album_id
        WHERE t1.tag_subject_id = $user1::BIGINT
          AND t2.tag_subject_id = $user2::BIGINT
        ORDER BY p.photo_id
    "#,
};

fn shared_photos(db: &dyn Database, user1: i64, user2: i64) -> Result<Vec<PhotoInfo>, DbError> {
    let params = QueryParams::new().with_int("user1", user1).with_int("user2", user2);
    let result = run_script(db, &SHARED_PHOTOS, params)?;
    let layout = PhotoRowLayout::from_columns(&ColumnIndex::from_headers(result.headers()))?;
    result
        .rows()
        .iter()
        .map(|row| layout.extract(row.as_ref()))
        .collect()
}

/// Up to `num` match pairs whose birth years differ by at most `year_diff`.
///
/// Both users need a gender and a birth year. Ranked by shared photo count
/// descending, then by the first and second user id.
pub fn find_match_pairs(db: &dyn Database, num: u32, year_diff: u32) -> Result<Vec<MatchPair>, DbError> {
    if num == 0 {
        return Ok(Vec::new());
    }

    let cozo = format!(
        r#"
        {FRIEND_RULES}
        born[u, first_name, last_name, gender, year] :=
            *users{{user_id: u, first_name, last_name, gender, year_of_birth: year}},
            !is_null(gender),
            !is_null(year)

        together[u1, u2, photo_id] :=
            *tags{{tag_photo_id: photo_id, tag_subject_id: u1}},
            *tags{{tag_photo_id: photo_id, tag_subject_id: u2}},
            u1 < u2

        overlap[u1, u2, count_unique(photo_id)] := together[u1, u2, photo_id]

        ?[user1_id, user1_first_name, user1_last_name, user1_year,
          user2_id, user2_first_name, user2_last_name, user2_year, shared_count] :=
            overlap[user1_id, user2_id, shared_count],
            born[user1_id, user1_first_name, user1_last_name, gender, user1_year],
            born[user2_id, user2_first_name, user2_last_name, gender, user2_year],
            abs(user1_year - user2_year) <= $year_diff,
            not friend[user1_id, user2_id]

        :order -shared_count, user1_id, user2_id
        :limit {num}
        "#
    );
    let postgres = format!(
        r#"
        WITH {FRIEND_CTE},
        born AS (
            SELECT user_id, first_name, last_name, gender, year_of_birth
            FROM users
            WHERE gender IS NOT NULL AND year_of_birth IS NOT NULL
        ),
        overlap AS (
            SELECT t1.tag_subject_id AS u1, t2.tag_subject_id AS u2,
                   COUNT(DISTINCT t1.tag_photo_id) AS shared_count
            FROM tags t1
            JOIN tags t2 ON t2.tag_photo_id = t1.tag_photo_id
                        AND t1.tag_subject_id < t2.tag_subject_id
            GROUP BY t1.tag_subject_id, t2.tag_subject_id
        )
        SELECT b1.user_id AS user1_id, b1.first_name AS user1_first_name,
               b1.last_name AS user1_last_name, b1.year_of_birth AS user1_year,
               b2.user_id AS user2_id, b2.first_name AS user2_first_name,
               b2.last_name AS user2_last_name, b2.year_of_birth AS user2_year,
               o.shared_count
        FROM overlap o
        JOIN born b1 ON b1.user_id = o.u1
        JOIN born b2 ON b2.user_id = o.u2
        WHERE b1.gender = b2.gender
          AND ABS(b1.year_of_birth - b2.year_of_birth) <= $year_diff::BIGINT
          AND NOT EXISTS (SELECT 1 FROM friend f WHERE f.a = o.u1 AND f.b = o.u2)
        ORDER BY o.shared_count DESC, o.u1, o.u2
        LIMIT {num}
        "#
    );

    let params = QueryParams::new().with_int("year_diff", i64::from(year_diff));
    let result = run_script(db, &Script { cozo: &cozo, postgres: &postgres }, params)?;
    let columns = ColumnIndex::from_headers(result.headers());
    let first = UserRowLayout::pair_member(&columns, 1)?;
    let second = UserRowLayout::pair_member(&columns, 2)?;
    let first_year = columns.index("user1_year")?;
    let second_year = columns.index("user2_year")?;
    let count_idx = columns.index("shared_count")?;

    let mut pairs = Vec::with_capacity(result.rows().len());
    for row in result.rows() {
        let row = row.as_ref();
        let user1 = first.extract(row)?;
        let user2 = second.extract(row)?;
        let shared_photos = shared_photos(db, user1.id, user2.id)?;
        pairs.push(MatchPair {
            user1: MatchedUser {
                user: user1,
                year_of_birth: cell_i64(row, first_year),
            },
            user2: MatchedUser {
                user: user2,
                year_of_birth: cell_i64(row, second_year),
            },
            shared_photo_count: cell_i64(row, count_idx),
            shared_photos,
        });
    }

    Ok(pairs)
}
