use std::error::Error;

use db::queries::tagged_photos::{find_most_tagged_photos, TaggedPhoto};
use db::Database;
use serde::Serialize;

use super::TaggedPhotosCmd;
use crate::commands::Execute;

/// Result of the tagged-photos command execution
#[derive(Debug, Default, Serialize)]
pub struct TaggedPhotosResult {
    pub num: u32,
    pub photos: Vec<TaggedPhoto>,
}

impl Execute for TaggedPhotosCmd {
    type Output = TaggedPhotosResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(TaggedPhotosResult {
            num: self.num,
            photos: find_most_tagged_photos(db, self.num)?,
        })
    }
}
