//! Output formatting for friend-ages command results.

use db::queries::friend_ages::AgedFriend;

use super::execute::FriendAgesResult;
use crate::output::{user_label, Outputable};

fn aged(friend: &AgedFriend) -> String {
    format!("{}, born {}", user_label(&friend.user), friend.birth_date)
}

impl Outputable for FriendAgesResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Friend ages for user {}", self.user_id), String::new()];

        match (&self.oldest, &self.youngest) {
            (Some(oldest), Some(youngest)) => {
                lines.push(format!("Oldest:   {}", aged(oldest)));
                lines.push(format!("Youngest: {}", aged(youngest)));
            }
            _ => lines.push("No friends found.".to_string()),
        }

        lines.join("\n")
    }
}
