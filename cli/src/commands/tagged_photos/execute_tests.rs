//! Execute tests for tagged-photos command.

#[cfg(all(test, feature = "backend-cozo"))]
mod tests {
    use super::super::TaggedPhotosCmd;
    use rstest::{fixture, rstest};

    crate::execute_test_fixture! {
        fixture_name: populated_db,
    }

    crate::execute_test! {
        test_name: test_top_two,
        fixture: populated_db,
        cmd: TaggedPhotosCmd { num: 2 },
        assertions: |result| {
            assert_eq!(result.num, 2);
            let ids: Vec<i64> = result.photos.iter().map(|p| p.photo.photo_id).collect();
            assert_eq!(ids, vec![101, 103]);
            assert_eq!(result.photos[0].tag_count, 4);
            assert_eq!(result.photos[0].photo.album_name, "Spring Break");
            let tagged: Vec<i64> = result.photos[0].tagged_users.iter().map(|u| u.id).collect();
            assert_eq!(tagged, vec![1, 2, 3, 4]);
        },
    }

    // 105 has no tags
    crate::execute_test! {
        test_name: test_num_larger_than_tagged_photos,
        fixture: populated_db,
        cmd: TaggedPhotosCmd { num: 50 },
        assertions: |result| {
            let ids: Vec<i64> = result.photos.iter().map(|p| p.photo.photo_id).collect();
            assert_eq!(ids, vec![101, 103, 102, 104]);
        },
    }

    crate::execute_no_data_test! {
        cmd: TaggedPhotosCmd { num: 5 },
        assertions: |result| {
            assert!(result.photos.is_empty());
        },
    }

    crate::execute_empty_db_test! {
        cmd_type: TaggedPhotosCmd,
        cmd: TaggedPhotosCmd { num: 5 },
    }
}
