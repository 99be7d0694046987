use std::error::Error;

use db::queries::friend_suggestions::{find_friend_suggestions, FriendSuggestion};
use db::Database;
use serde::Serialize;

use super::SuggestFriendsCmd;
use crate::commands::Execute;

/// Result of the suggest-friends command execution
#[derive(Debug, Default, Serialize)]
pub struct SuggestFriendsResult {
    pub num: u32,
    pub suggestions: Vec<FriendSuggestion>,
}

impl Execute for SuggestFriendsCmd {
    type Output = SuggestFriendsResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(SuggestFriendsResult {
            num: self.num,
            suggestions: find_friend_suggestions(db, self.num)?,
        })
    }
}
