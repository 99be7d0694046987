//! Output formatting for suggest-friends command results.

use super::execute::SuggestFriendsResult;
use crate::output::{user_label, user_list, Outputable};

impl Outputable for SuggestFriendsResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Friend suggestions (top {})", self.num)];

        if self.suggestions.is_empty() {
            lines.push(String::new());
            lines.push("No suggestions found.".to_string());
            return lines.join("\n");
        }

        lines.push(String::new());
        for s in &self.suggestions {
            lines.push(format!(
                "{} + {}: {} mutual friend(s)",
                user_label(&s.user1),
                user_label(&s.user2),
                s.mutual_friend_count
            ));
            lines.push(format!("  via {}", user_list(&s.mutual_friends)));
        }

        lines.join("\n")
    }
}
