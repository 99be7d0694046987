use serde::Serialize;

/// A photo together with the album it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoInfo {
    pub photo_id: i64,
    pub album_id: i64,
    pub link: String,
    pub album_name: String,
}
