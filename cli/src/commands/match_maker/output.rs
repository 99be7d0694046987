//! Output formatting for match-maker command results.

use db::queries::match_maker::MatchedUser;

use super::execute::MatchMakerResult;
use crate::output::{user_label, Outputable};

fn matched(user: &MatchedUser) -> String {
    format!("{}, born {}", user_label(&user.user), user.year_of_birth)
}

impl Outputable for MatchMakerResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!(
            "Match-maker (top {}, birth years within {})",
            self.num, self.year_diff
        )];

        if self.pairs.is_empty() {
            lines.push(String::new());
            lines.push("No matches found.".to_string());
            return lines.join("\n");
        }

        for pair in &self.pairs {
            lines.push(String::new());
            lines.push(format!("{} + {}", matched(&pair.user1), matched(&pair.user2)));
            let photos: Vec<String> = pair
                .shared_photos
                .iter()
                .map(|p| format!("{} ({})", p.photo_id, p.album_name))
                .collect();
            lines.push(format!(
                "  {} shared photo(s): {}",
                pair.shared_photo_count,
                photos.join(", ")
            ));
        }

        lines.join("\n")
    }
}
