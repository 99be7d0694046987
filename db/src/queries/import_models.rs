//! JSON import structures for social network datasets.
//!
//! A dataset document is one object with an array per relation. Every array
//! is optional, and optional columns may be omitted or `null`.
//!
//! ```json
//! {
//!   "users": [{"user_id": 1, "first_name": "Ann", "last_name": "Lee", "year_of_birth": 1990}],
//!   "friends": [{"user1_id": 1, "user2_id": 2}]
//! }
//! ```

use serde::Deserialize;

use crate::backend::ValueType;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub users: Vec<UserRecord>,
    pub friends: Vec<FriendRecord>,
    pub cities: Vec<CityRecord>,
    pub user_current_cities: Vec<CurrentCityRecord>,
    pub user_hometown_cities: Vec<HometownCityRecord>,
    pub albums: Vec<AlbumRecord>,
    pub photos: Vec<PhotoRecord>,
    pub tags: Vec<TagRecord>,
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub year_of_birth: Option<i64>,
    pub month_of_birth: Option<i64>,
    pub day_of_birth: Option<i64>,
    pub gender: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FriendRecord {
    pub user1_id: i64,
    pub user2_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CityRecord {
    pub city_id: i64,
    pub city_name: String,
    pub state_name: String,
    pub country_name: String,
}

#[derive(Debug, Deserialize)]
pub struct CurrentCityRecord {
    pub user_id: i64,
    pub current_city_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct HometownCityRecord {
    pub user_id: i64,
    pub hometown_city_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AlbumRecord {
    pub album_id: i64,
    pub album_owner_id: i64,
    pub album_name: String,
    pub album_visibility: String,
    pub cover_photo_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PhotoRecord {
    pub photo_id: i64,
    pub album_id: i64,
    #[serde(default)]
    pub photo_caption: String,
    pub photo_link: String,
}

#[derive(Debug, Deserialize)]
pub struct TagRecord {
    pub tag_photo_id: i64,
    pub tag_subject_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct EventRecord {
    pub event_id: i64,
    pub event_creator_id: i64,
    pub event_name: String,
    pub event_city_id: i64,
}

/// Conversion of a record into row cells, in relation field order.
pub trait ToRow {
    fn to_row(&self) -> Vec<ValueType>;
}

impl ToRow for UserRecord {
    fn to_row(&self) -> Vec<ValueType> {
        vec![
            self.user_id.into(),
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
            self.year_of_birth.into(),
            self.month_of_birth.into(),
            self.day_of_birth.into(),
            self.gender.clone().into(),
        ]
    }
}

impl ToRow for CityRecord {
    fn to_row(&self) -> Vec<ValueType> {
        vec![
            self.city_id.into(),
            self.city_name.as_str().into(),
            self.state_name.as_str().into(),
            self.country_name.as_str().into(),
        ]
    }
}

impl ToRow for CurrentCityRecord {
    fn to_row(&self) -> Vec<ValueType> {
        vec![self.user_id.into(), self.current_city_id.into()]
    }
}

impl ToRow for HometownCityRecord {
    fn to_row(&self) -> Vec<ValueType> {
        vec![self.user_id.into(), self.hometown_city_id.into()]
    }
}

impl ToRow for AlbumRecord {
    fn to_row(&self) -> Vec<ValueType> {
        vec![
            self.album_id.into(),
            self.album_owner_id.into(),
            self.album_name.as_str().into(),
            self.album_visibility.as_str().into(),
            self.cover_photo_id.into(),
        ]
    }
}

impl ToRow for PhotoRecord {
    fn to_row(&self) -> Vec<ValueType> {
        vec![
            self.photo_id.into(),
            self.album_id.into(),
            self.photo_caption.as_str().into(),
            self.photo_link.as_str().into(),
        ]
    }
}

impl ToRow for TagRecord {
    fn to_row(&self) -> Vec<ValueType> {
        vec![self.tag_photo_id.into(), self.tag_subject_id.into()]
    }
}

impl ToRow for EventRecord {
    fn to_row(&self) -> Vec<ValueType> {
        vec![
            self.event_id.into(),
            self.event_creator_id.into(),
            self.event_name.as_str().into(),
            self.event_city_id.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ALBUMS, USERS};

    #[test]
    fn test_empty_document_defaults() {
        let dataset: Dataset = serde_json::from_str("{}").unwrap();
        assert!(dataset.users.is_empty());
        assert!(dataset.events.is_empty());
    }

    #[test]
    fn test_user_optional_fields() {
        let json = r#"{"users": [{"user_id": 3, "first_name": "A", "last_name": "B", "month_of_birth": null}]}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        let user = &dataset.users[0];
        assert_eq!(user.year_of_birth, None);
        assert_eq!(user.month_of_birth, None);
        assert_eq!(user.gender, None);
    }

    #[test]
    fn test_row_width_matches_relation() {
        let user = UserRecord {
            user_id: 1,
            first_name: "A".into(),
            last_name: "B".into(),
            year_of_birth: Some(1990),
            month_of_birth: None,
            day_of_birth: None,
            gender: None,
        };
        assert_eq!(user.to_row().len(), USERS.field_count());
        assert_eq!(user.to_row()[4], ValueType::Null);

        let album = AlbumRecord {
            album_id: 1,
            album_owner_id: 2,
            album_name: "x".into(),
            album_visibility: "EVERYONE".into(),
            cover_photo_id: None,
        };
        assert_eq!(album.to_row().len(), ALBUMS.field_count());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"cities": [{"city_id": 1, "city_name": "X"}]}"#;
        assert!(serde_json::from_str::<Dataset>(json).is_err());
    }
}
