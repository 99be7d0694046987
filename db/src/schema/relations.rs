//! All database relation definitions.
//!
//! Nine relations model users, their friendships and cities, and the photos,
//! albums, tags and events they create.

use super::definition::{DataType, SchemaField, SchemaRelation};

use DataType::{Int, String as Text};

/// Users: one row per person
///
/// Key fields: user_id
/// Value fields: first_name, last_name, year/month/day_of_birth, gender
pub const USERS: SchemaRelation = SchemaRelation {
    name: "users",
    key_fields: &[SchemaField::required("user_id", Int)],
    value_fields: &[
        SchemaField::required("first_name", Text),
        SchemaField::required("last_name", Text),
        SchemaField::optional("year_of_birth", Int),
        SchemaField::optional("month_of_birth", Int),
        SchemaField::optional("day_of_birth", Int),
        SchemaField::optional("gender", Text),
    ],
};

/// Friendships, stored once per unordered pair with user1_id < user2_id
pub const FRIENDS: SchemaRelation = SchemaRelation {
    name: "friends",
    key_fields: &[
        SchemaField::required("user1_id", Int),
        SchemaField::required("user2_id", Int),
    ],
    value_fields: &[],
};

pub const CITIES: SchemaRelation = SchemaRelation {
    name: "cities",
    key_fields: &[SchemaField::required("city_id", Int)],
    value_fields: &[
        SchemaField::required("city_name", Text),
        SchemaField::required("state_name", Text),
        SchemaField::required("country_name", Text),
    ],
};

pub const USER_CURRENT_CITIES: SchemaRelation = SchemaRelation {
    name: "user_current_cities",
    key_fields: &[SchemaField::required("user_id", Int)],
    value_fields: &[SchemaField::required("current_city_id", Int)],
};

pub const USER_HOMETOWN_CITIES: SchemaRelation = SchemaRelation {
    name: "user_hometown_cities",
    key_fields: &[SchemaField::required("user_id", Int)],
    value_fields: &[SchemaField::required("hometown_city_id", Int)],
};

pub const ALBUMS: SchemaRelation = SchemaRelation {
    name: "albums",
    key_fields: &[SchemaField::required("album_id", Int)],
    value_fields: &[
        SchemaField::required("album_owner_id", Int),
        SchemaField::required("album_name", Text),
        SchemaField::required("album_visibility", Text),
        SchemaField::optional("cover_photo_id", Int),
    ],
};

pub const PHOTOS: SchemaRelation = SchemaRelation {
    name: "photos",
    key_fields: &[SchemaField::required("photo_id", Int)],
    value_fields: &[
        SchemaField::required("album_id", Int),
        SchemaField::required("photo_caption", Text),
        SchemaField::required("photo_link", Text),
    ],
};

/// Tags: a user appearing in a photo
pub const TAGS: SchemaRelation = SchemaRelation {
    name: "tags",
    key_fields: &[
        SchemaField::required("tag_photo_id", Int),
        SchemaField::required("tag_subject_id", Int),
    ],
    value_fields: &[],
};

pub const EVENTS: SchemaRelation = SchemaRelation {
    name: "events",
    key_fields: &[SchemaField::required("event_id", Int)],
    value_fields: &[
        SchemaField::required("event_creator_id", Int),
        SchemaField::required("event_name", Text),
        SchemaField::required("event_city_id", Int),
    ],
};

/// All relations, in creation order.
pub const ALL_RELATIONS: &[&SchemaRelation] = &[
    &USERS,
    &FRIENDS,
    &CITIES,
    &USER_CURRENT_CITIES,
    &USER_HOMETOWN_CITIES,
    &ALBUMS,
    &PHOTOS,
    &TAGS,
    &EVENTS,
];
