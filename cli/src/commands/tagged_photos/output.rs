//! Output formatting for tagged-photos command results.

use super::execute::TaggedPhotosResult;
use crate::output::{user_list, Outputable};

impl Outputable for TaggedPhotosResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Most tagged photos (top {})", self.num)];

        if self.photos.is_empty() {
            lines.push(String::new());
            lines.push("No tagged photos found.".to_string());
            return lines.join("\n");
        }

        for entry in &self.photos {
            let photo = &entry.photo;
            lines.push(String::new());
            lines.push(format!(
                "Photo {} in \"{}\" (album {}): {} tag(s)",
                photo.photo_id, photo.album_name, photo.album_id, entry.tag_count
            ));
            lines.push(format!("  {}", photo.link));
            lines.push(format!("  Tagged: {}", user_list(&entry.tagged_users)));
        }

        lines.join("\n")
    }
}
