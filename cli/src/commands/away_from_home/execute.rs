use std::error::Error;

use db::queries::away_from_home::find_users_away_from_home;
use db::{Database, UserInfo};
use serde::Serialize;

use super::AwayFromHomeCmd;
use crate::commands::Execute;

/// Result of the away-from-home command execution
#[derive(Debug, Default, Serialize)]
pub struct AwayFromHomeResult {
    pub users: Vec<UserInfo>,
}

impl Execute for AwayFromHomeCmd {
    type Output = AwayFromHomeResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(AwayFromHomeResult {
            users: find_users_away_from_home(db)?,
        })
    }
}
