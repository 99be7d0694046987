use std::error::Error;

use db::queries::friend_ages::{find_friend_ages, AgedFriend};
use db::Database;
use serde::Serialize;

use super::FriendAgesCmd;
use crate::commands::Execute;

/// Result of the friend-ages command execution
#[derive(Debug, Default, Serialize)]
pub struct FriendAgesResult {
    pub user_id: i64,
    pub oldest: Option<AgedFriend>,
    pub youngest: Option<AgedFriend>,
}

impl Execute for FriendAgesCmd {
    type Output = FriendAgesResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        let info = find_friend_ages(db, self.user_id)?;
        let (oldest, youngest) = match info {
            Some(info) => (Some(info.oldest), Some(info.youngest)),
            None => (None, None),
        };

        Ok(FriendAgesResult {
            user_id: self.user_id,
            oldest,
            youngest,
        })
    }
}
