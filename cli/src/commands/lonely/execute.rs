use std::error::Error;

use db::queries::lonely_users::find_lonely_users;
use db::{Database, UserInfo};
use serde::Serialize;

use super::LonelyCmd;
use crate::commands::Execute;

/// Result of the lonely command execution
#[derive(Debug, Default, Serialize)]
pub struct LonelyResult {
    pub users: Vec<UserInfo>,
}

impl Execute for LonelyCmd {
    type Output = LonelyResult;

    fn execute(self, db: &dyn Database) -> Result<Self::Output, Box<dyn Error>> {
        Ok(LonelyResult {
            users: find_lonely_users(db)?,
        })
    }
}
