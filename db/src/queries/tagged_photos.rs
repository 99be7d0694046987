use serde::Serialize;

use crate::backend::{Database, QueryParams, Row, Script};
use crate::db::{cell_i64, cell_id, cell_string, extract_users, run_script, ColumnIndex, DbError};
use crate::types::{PhotoInfo, UserInfo};

/// A photo ranked by how many users are tagged in it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedPhoto {
    pub photo: PhotoInfo,
    pub tag_count: i64,
    pub tagged_users: Vec<UserInfo>,
}

const TAGGED_USERS: Script<'static> = Script {
    cozo: r#"
        ?[user_id, first_name, last_name] :=
            *tags{tag_photo_id, tag_subject_id: user_id},
            tag_photo_id == $photo_id,
            *users{user_id, first_name, last_name}

        :order user_id
    "#,
    postgres: r#"
        SELECT u.user_id, u.first_name, u.last_name
        FROM tags t
        JOIN users u ON u.user_id = t.tag_subject_id
        WHERE t.tag_photo_id = $photo_id::BIGINT
        ORDER BY u.user_id
    "#,
};

/// Column positions of a photo joined with its album.
pub(crate) struct PhotoRowLayout {
    photo_id: usize,
    album_id: usize,
    photo_link: usize,
    album_name: usize,
}

impl PhotoRowLayout {
    pub(crate) fn from_columns(columns: &ColumnIndex) -> Result<Self, DbError> {
        Ok(Self {
            photo_id: columns.index("photo_id")?,
            album_id: columns.index("album_id")?,
            photo_link: columns.index("photo_link")?,
            album_name: columns.index("album_name")?,
        })
    }

    pub(crate) fn extract(&self, row: &dyn Row) -> Result<PhotoInfo, DbError> {
        Ok(PhotoInfo {
            photo_id: cell_id(row, self.photo_id)?,
            album_id: cell_id(row, self.album_id)?,
            link: cell_string(row, self.photo_link),
            album_name: cell_string(row, self.album_name),
        })
    }
}

/// The `num` photos with the most tags, ties by ascending photo id.
///
/// Untagged photos are never returned.
pub fn find_most_tagged_photos(db: &dyn Database, num: u32) -> Result<Vec<TaggedPhoto>, DbError> {
    if num == 0 {
        return Ok(Vec::new());
    }

    let cozo = format!(
        r#"
        tag_counts[photo_id, count_unique(subject)] :=
            *tags{{tag_photo_id: photo_id, tag_subject_id: subject}}

        ?[photo_id, album_id, photo_link, album_name, tag_count] :=
            tag_counts[photo_id, tag_count],
            *photos{{photo_id, album_id, photo_link}},
            *albums{{album_id, album_name}}

        :order -tag_count, photo_id
        :limit {num}
        "#
    );
    let postgres = format!(
        r#"
        SELECT p.photo_id, p.album_id, p.photo_link, a.album_name, t.tag_count
        FROM (
            SELECT tag_photo_id, COUNT(DISTINCT tag_subject_id) AS tag_count
            FROM tags
            GROUP BY tag_photo_id
        ) t
        JOIN photos p ON p.photo_id = t.tag_photo_id
        JOIN albums a ON a.album_id = p.album_id
        ORDER BY t.tag_count DESC, p.photo_id
        LIMIT {num}
        "#
    );

    let result = run_script(db, &Script { cozo: &cozo, postgres: &postgres }, QueryParams::new())?;
    let columns = ColumnIndex::from_headers(result.headers());
    let layout = PhotoRowLayout::from_columns(&columns)?;
    let count_idx = columns.index("tag_count")?;

    let mut photos = Vec::with_capacity(result.rows().len());
    for row in result.rows() {
        let photo = layout.extract(row.as_ref())?;
        let params = QueryParams::new().with_int("photo_id", photo.photo_id);
        let tagged = run_script(db, &TAGGED_USERS, params)?;
        photos.push(TaggedPhoto {
            photo,
            tag_count: cell_i64(row.as_ref(), count_idx),
            tagged_users: extract_users(tagged.as_ref())?,
        });
    }

    Ok(photos)
}

#[cfg(all(test, feature = "backend-cozo"))]
mod tests {
    use super::*;
    use crate::test_utils::{setup_uninitialized_db, social_graph_db};
    use rstest::{fixture, rstest};

    #[fixture]
    fn db() -> Box<dyn Database> {
        social_graph_db()
    }

    #[rstest]
    fn test_top_two(db: Box<dyn Database>) {
        let photos = find_most_tagged_photos(&*db, 2).unwrap();

        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].photo.photo_id, 101);
        assert_eq!(photos[0].tag_count, 4);
        assert_eq!(photos[0].photo.album_name, "Spring Break");
        assert_eq!(photos[0].photo.link, "https://photos.fakebook.test/101.jpg");
        let tagged: Vec<i64> = photos[0].tagged_users.iter().map(|u| u.id).collect();
        assert_eq!(tagged, vec![1, 2, 3, 4]);

        assert_eq!(photos[1].photo.photo_id, 103);
        assert_eq!(photos[1].photo.album_id, 2);
        assert_eq!(photos[1].tag_count, 4);
    }

    #[rstest]
    fn test_untagged_photo_never_selected(db: Box<dyn Database>) {
        let photos = find_most_tagged_photos(&*db, 100).unwrap();
        let ids: Vec<i64> = photos.iter().map(|p| p.photo.photo_id).collect();
        assert_eq!(ids, vec![101, 103, 102, 104]);
    }

    #[rstest]
    fn test_counts_non_increasing(db: Box<dyn Database>) {
        let photos = find_most_tagged_photos(&*db, 100).unwrap();
        assert!(photos.windows(2).all(|w| w[0].tag_count >= w[1].tag_count));
        assert!(photos
            .iter()
            .all(|p| p.tagged_users.len() as i64 == p.tag_count));
    }

    #[rstest]
    fn test_zero_does_not_touch_store() {
        let db = setup_uninitialized_db();
        assert!(find_most_tagged_photos(&*db, 0).unwrap().is_empty());
    }
}
